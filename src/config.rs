use std::path::{PathBuf, is_separator};

use crate::cli::Cli;
use crate::error::{Result, ScrambleError};
use crate::names::MAX_WORDS;

pub const DEFAULT_WORD_COUNT: usize = MAX_WORDS;
pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_COLLISION_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAP_NAME: &str = "map";

/// Validated settings for one scramble run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleConfig {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub word_count: usize,
    pub separator: String,
    pub collision_attempts: u32,
    pub map_name: String,
    /// Accepted for compatibility; subdirectories are never descended into.
    pub recursive: bool,
}

impl ScrambleConfig {
    pub fn new(directory: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            directory: directory.into(),
            dry_run,
            word_count: DEFAULT_WORD_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            collision_attempts: DEFAULT_COLLISION_ATTEMPTS,
            map_name: DEFAULT_MAP_NAME.to_string(),
            recursive: false,
        }
    }

    /// File name of the mapping sidecar, e.g. `map.json`.
    pub fn map_file_name(&self) -> String {
        format!("{}.json", self.map_name)
    }

    pub fn map_path(&self) -> PathBuf {
        self.directory.join(self.map_file_name())
    }

    pub fn validate(&self) -> Result<()> {
        if self.word_count == 0 || self.word_count > MAX_WORDS {
            return Err(ScrambleError::Config(format!(
                "word count must be between 1 and {MAX_WORDS}, got {}",
                self.word_count
            )));
        }
        if has_path_chars(&self.separator) {
            return Err(ScrambleError::Config(format!(
                "separator {:?} may not contain path separators or NUL",
                self.separator
            )));
        }
        if self.collision_attempts == 0 {
            return Err(ScrambleError::Config(
                "collision attempts must be at least 1".to_string(),
            ));
        }
        if self.map_name.is_empty()
            || self.map_name == "."
            || self.map_name == ".."
            || has_path_chars(&self.map_name)
        {
            return Err(ScrambleError::Config(format!(
                "map name {:?} is not a plain file name",
                self.map_name
            )));
        }
        Ok(())
    }
}

fn has_path_chars(s: &str) -> bool {
    s.chars().any(|c| is_separator(c) || c == '/' || c == '\0')
}

impl TryFrom<Cli> for ScrambleConfig {
    type Error = ScrambleError;

    fn try_from(cli: Cli) -> Result<Self> {
        let mut config = Self::new(cli.directory, cli.dry_run);
        config.word_count = cli.word_count;
        config.separator = cli.separator;
        config.collision_attempts = cli.collision_attempts;
        config.map_name = cli.map_name;
        config.recursive = cli.recursive;
        config.validate()?;
        Ok(config)
    }
}
