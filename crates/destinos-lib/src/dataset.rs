use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the destination data file.
const DATA_FILENAME: &str = "destinos.txt";

/// Environment variable overriding the data file location.
pub const DATA_FILE_ENV: &str = "DESTINOS_DATA_FILE";

/// Resolve the default data file location using platform-specific project
/// directories.
pub fn default_data_file() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("co", "destinos", "destinos").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATA_FILENAME))
}

/// Resolve the destination data file.
///
/// The resolution order matches the documentation:
/// 1. Explicit `target` argument when provided.
/// 2. `DESTINOS_DATA_FILE` environment variable.
/// 3. XDG/platform-specific project directories.
///
/// The overrides accept either the file itself or a directory containing
/// [`DATA_FILENAME`]. Fails with [`Error::DataFileNotFound`] when the
/// resolved path does not exist; nothing is ever created here.
pub fn resolve_data_file(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return existing(canonical_data_file(explicit));
    }

    if let Some(env_path) = env::var_os(DATA_FILE_ENV) {
        return existing(canonical_data_file(Path::new(&env_path)));
    }

    existing(default_data_file()?)
}

fn canonical_data_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DATA_FILENAME);
    }

    path.to_path_buf()
}

fn existing(path: PathBuf) -> Result<PathBuf> {
    if path.exists() {
        debug!(path = %path.display(), "resolved destination data file");
        Ok(path)
    } else {
        Err(Error::DataFileNotFound { path })
    }
}
