use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command, DEFAULT_MINIMUM_MB};
use crate::error::ConfigError;
use crate::scanner::Filter;

/// Everything one invocation needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory the scan starts from
    pub base: PathBuf,
    pub filter: Filter,
    /// CSV destination, if the user asked for one
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Config {
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let base = match cli.base {
            Some(base) => base,
            None => default_base()?,
        };
        let base = std::path::absolute(&base)
            .map_err(|e| ConfigError::InvalidPath(format!("{}: {}", base.display(), e)))?;

        let filter = match cli.command {
            Some(Command::Size { minimum }) => Filter::MinimumSize { megabytes: minimum },
            Some(Command::Search { pattern }) => Filter::NamePattern(pattern),
            None => Filter::MinimumSize {
                megabytes: DEFAULT_MINIMUM_MB,
            },
        };

        Ok(Self {
            base,
            filter,
            output: cli.file,
            quiet: cli.quiet,
        })
    }
}

/// Root of the drive holding the user's home directory: `/` on Unix, `C:\` on Windows.
pub fn default_base() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(drive_root(&home))
}

fn drive_root(path: &Path) -> PathBuf {
    path.ancestors().last().unwrap_or(path).to_path_buf()
}
