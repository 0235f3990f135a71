use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cdhrec-uploader", version, about = "Check and upload commander deck recommendations")]
pub struct Cli {
    /// Settings file, defaults to `Settings.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug logs.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count a decklist and report whether it is legal.
    Check {
        /// Decklist file, `-` for stdin.
        decklist: PathBuf,
        /// The deck runs a partner commander.
        #[arg(long)]
        partner: bool,
    },
    /// Look up commanders by name.
    Commanders {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Upload a deck recommendation.
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        commander: String,
        #[arg(long)]
        partner: Option<String>,
        /// Decklist file, `-` for stdin.
        decklist: PathBuf,
    },
}
