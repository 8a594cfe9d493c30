use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{
    DEFAULT_COLLISION_ATTEMPTS, DEFAULT_MAP_NAME, DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT,
};

#[derive(Debug, Parser)]
#[command(
    name = "scramble",
    version,
    about = "Scramble file names in a directory to unique names (with map)"
)]
pub struct Cli {
    /// Directory whose entries get renamed
    #[arg(short = 'i', long)]
    pub directory: PathBuf,

    /// Only compute and record the new names, don't rename anything
    #[arg(
        short = 'd',
        long,
        required = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub dry_run: bool,

    /// Number of words in each generated name (1-3)
    #[arg(short = 'w', long, default_value_t = DEFAULT_WORD_COUNT)]
    pub word_count: usize,

    /// String placed between the words of a generated name
    #[arg(short = 's', long, default_value = DEFAULT_SEPARATOR, allow_hyphen_values = true)]
    pub separator: String,

    /// How many names to try per file before skipping it
    #[arg(long, default_value_t = DEFAULT_COLLISION_ATTEMPTS)]
    pub collision_attempts: u32,

    /// Base name of the mapping file written into the directory (`.json` is appended)
    #[arg(long, default_value = DEFAULT_MAP_NAME)]
    pub map_name: String,

    /// Recurse into subdirectories (not supported; ignored)
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Log every candidate name that is tried
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
