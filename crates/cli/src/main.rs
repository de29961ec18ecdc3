mod args;
mod commands;
mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{ParamOverrides, RunArgs};
use commands::{params, run, stats};

/// Censim: A Satellite Repeat Array Simulator
///
/// This tool simulates how a tandem satellite array (a centromere-like
/// repeat) changes over time under point substitution and whole-unit
/// duplication and deletion.
#[derive(Parser, Debug)]
#[command(name = "censim")]
#[command(author, version, about = "Simulates the evolution of tandem repeat arrays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation.
    ///
    /// Evolves the array generation by generation, printing periodic status
    /// lines, and optionally exports the final array and its colors.
    Run(Box<RunArgs>),

    /// Print the effective parameter record as JSON.
    ///
    /// Useful as a starting point for a `--params` file.
    Params(ParamOverrides),

    /// Report size and diversity of an array stored as FASTA.
    Stats {
        /// FASTA file with one repeat unit per record
        fasta: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Params(overrides) => {
            params::show_params(&overrides)?;
        }
        Commands::Stats { fasta, json } => {
            stats::show_stats(&fasta, json)?;
        }
    }

    Ok(())
}
