use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Antioquia travel destination utilities")]
struct Cli {
    /// Override the destination data file or its directory.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two destination names.
    Route {
        /// Starting destination name.
        #[arg(long = "from")]
        from: String,
        /// Target destination name.
        #[arg(long = "to")]
        to: String,
    },
    /// Recommend destinations similar to a favourite, nearest first.
    Recommend {
        /// Destination the recommendation chain starts from.
        favorite: String,
        /// How many recommendations to produce.
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Show one destination with its attributes and distance table.
    Show {
        /// Destination name.
        name: String,
    },
    /// List every destination in the catalog.
    List,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to } => {
            commands::route::handle_route_command(cli.data_file.as_deref(), cli.format, &from, &to)
        }
        Command::Recommend { favorite, count } => commands::recommend::handle_recommend_command(
            cli.data_file.as_deref(),
            cli.format,
            &favorite,
            count,
        ),
        Command::Show { name } => {
            commands::show::handle_show_command(cli.data_file.as_deref(), cli.format, &name)
        }
        Command::List => commands::list::handle_list_command(cli.data_file.as_deref(), cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so JSON output on stdout stays parseable.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
