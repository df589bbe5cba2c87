use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Destinos library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Destination data file could not be located at the resolved path.
    #[error("destination data file not found at {path}")]
    DataFileNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the destination data file")]
    ProjectDirsUnavailable,

    /// Raised when a destination name could not be found in the catalog.
    #[error("unknown destination: {name}{}", format_suggestions(.suggestions))]
    UnknownDestination {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two destinations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{only}'?"),
        many => {
            let quoted: Vec<String> = many.iter().map(|s| format!("'{s}'")).collect();
            format!(". Did you mean one of: {}?", quoted.join(", "))
        }
    }
}
