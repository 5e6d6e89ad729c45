use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MINIMUM_MB: u64 = 250;

#[derive(Parser, Debug)]
#[command(
    name = "fsas",
    about = "File size and search.",
    after_help = "Yet another implementation of a filesystem file size and search cli app."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base directory where search will begin (default: root of the home drive)
    #[arg(short, long, global = true, env = "FSAS_BASE")]
    pub base: Option<PathBuf>,

    /// Output file for saving results as CSV
    #[arg(short, long, global = true, env = "FSAS_FILE")]
    pub file: Option<PathBuf>,

    /// Don't show the progress spinner while scanning
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List files larger than a minimum size
    Size {
        /// Minimum file size in MBs to include in results
        #[arg(short, long, default_value_t = DEFAULT_MINIMUM_MB)]
        minimum: u64,
    },
    /// List files whose name matches a pattern (not yet supported)
    Search {
        /// Name pattern to match
        #[arg(short = 'm', long = "match", default_value = "*")]
        pattern: String,
    },
}
