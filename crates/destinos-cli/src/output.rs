//! Output format selection for command results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    Text,
    /// Pretty-printed JSON for scripting.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Write one command result to stdout, either through its text renderer
    /// or as pretty-printed JSON of the same value.
    pub fn emit<T: Serialize>(
        self,
        value: &T,
        render: impl FnOnce(&T) -> String,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", render(value));
                Ok(())
            }
            OutputFormat::Json => {
                let mut stdout = io::stdout();
                serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
                stdout.write_all(b"\n")?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_accepted_flag_values() {
        for format in OutputFormat::value_variants() {
            let rendered = format.to_string();
            assert!(OutputFormat::from_str(&rendered, false).is_ok());
        }
    }
}
