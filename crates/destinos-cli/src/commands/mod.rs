//! CLI subcommand handlers.
//!
//! Each module handles one subcommand, keeping main.rs a thin
//! parse-and-dispatch layer. Every handler loads the destination catalog the
//! same way through [`load_catalog`].

use std::path::Path;

use anyhow::{Context, Result};

use destinos_lib::{load_atlas, resolve_data_file, Atlas};

pub mod list;
pub mod recommend;
pub mod route;
pub mod show;

/// Locate and load the destination catalog shared by every subcommand.
pub fn load_catalog(target: Option<&Path>) -> Result<Atlas> {
    let data_path =
        resolve_data_file(target).context("failed to locate the destination data file")?;
    let atlas = load_atlas(&data_path)
        .with_context(|| format!("failed to load destinations from {}", data_path.display()))?;
    Ok(atlas)
}
