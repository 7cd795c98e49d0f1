//! focalmap CLI - focal point grouping and distance enrichment.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::KindArg;
use commands::config::ConfigCommands;

#[derive(Parser)]
#[command(name = "focalmap")]
#[command(version, about = "Focal point grouping and distance enrichment for parcel maps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configuration file with default settings
    Init,

    /// Group map tiles into focal points and write the store
    Build {
        /// Raw tiles JSON (default: inputs.tiles)
        #[arg(long)]
        tiles: Option<PathBuf>,

        /// District definitions JSON (default: inputs.districts)
        #[arg(long)]
        districts: Option<PathBuf>,

        /// Plaza name lookup JSON (default: inputs.plazas)
        #[arg(long)]
        plazas: Option<PathBuf>,

        /// Output store file (default: store.focal_points)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute distance rows for assets and write them as CSV
    Distances {
        /// Assets JSON: array of {id, x, y, type}
        assets: PathBuf,

        /// Focal point store (default: store.focal_points)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Distance metric: manhattan or euclidean (default: distance.metric)
        #[arg(long)]
        metric: Option<String>,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Summarize the focal point store
    Inspect {
        /// Focal point store (default: store.focal_points)
        #[arg(long)]
        store: Option<PathBuf>,

        /// List every group of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Print the distance column dictionary as CSV
    Columns {
        /// Focal point store (default: store.focal_points)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Build {
            tiles,
            districts,
            plazas,
            output,
        } => commands::build::run(commands::build::BuildArgs {
            tiles,
            districts,
            plazas,
            output,
        }),
        Commands::Distances {
            assets,
            store,
            metric,
            output,
            quiet,
        } => commands::distances::run(commands::distances::DistancesArgs {
            assets,
            store,
            metric,
            output,
            quiet,
        }),
        Commands::Inspect { store, kind } => commands::inspect::run(store, kind),
        Commands::Columns { store, output } => commands::columns::run(store, output),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

