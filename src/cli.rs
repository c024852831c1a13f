use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "hoopscout scouting statistics")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Build a scouting report from a roster export file
    Report {
        /// Path to the roster JSON export
        input: PathBuf,
        /// Top grade of the scouting scale (optional, defaults to 100)
        #[arg(short, long, default_value_t = 100)]
        max_grade: u32,
    },
    /// List every selectable player height
    Heights,
    /// List the recognized positions and their abbreviations
    Positions,
}
