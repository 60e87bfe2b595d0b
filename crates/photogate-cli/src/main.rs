//! CLI for photogate — screen photonic gate phase configurations.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "photogate")]
#[command(about = "photogate — phase-configuration screening for two-input photonic logic gates")]
#[command(version = photogate_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one dataset against a target gate polarity and classify every row
    Classify {
        /// CSV table of simulated outputs for the four input combinations
        #[arg(long)]
        data: PathBuf,

        /// Target gate polarity: nor or nand (case-insensitive)
        #[arg(long)]
        gate: String,

        /// Fraction of the maximum score used as the classification cutoff
        #[arg(long, default_value_t = photogate_core::DEFAULT_THRESHOLD_FRACTION)]
        threshold_fraction: f64,

        /// Write the full run result as JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the augmented table (metrics + labels) as CSV
        #[arg(long)]
        save_table: Option<PathBuf>,
    },

    /// Process a NOR and/or a NAND dataset in turn; one failure does not
    /// abort the remaining gates
    Batch {
        /// CSV table for the NOR gate
        #[arg(long)]
        nor: Option<PathBuf>,

        /// CSV table for the NAND gate
        #[arg(long)]
        nand: Option<PathBuf>,

        /// Fraction of the maximum score used as the classification cutoff
        #[arg(long, default_value_t = photogate_core::DEFAULT_THRESHOLD_FRACTION)]
        threshold_fraction: f64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            data,
            gate,
            threshold_fraction,
            output,
            save_table,
        } => commands::classify::run(
            &data,
            &gate,
            threshold_fraction,
            output.as_deref(),
            save_table.as_deref(),
        ),
        Commands::Batch {
            nor,
            nand,
            threshold_fraction,
        } => commands::batch::run(nor.as_deref(), nand.as_deref(), threshold_fraction),
    }
}
