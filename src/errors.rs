use crate::config::ConfigError;
use fs_types::UnsupportedFileSystem;
use std::{io, path::PathBuf};

/// Errors that end a test run before a checker outcome can be produced.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(display = "{}", why)]
    UnsupportedFileSystem { why: UnsupportedFileSystem },
    #[error(display = "configuration error: {}", why)]
    Config { why: ConfigError },
    #[error(display = "failed to run '{}': {}", command, why)]
    Runner { command: String, why: io::Error },
    #[error(display = "path {:?} is not valid UTF-8 and cannot be placed in a command", path)]
    NonUtf8Path { path: PathBuf },
    #[error(display = "'{}' failed with exit status {}", command, status)]
    MkfsFailed { command: String, status: i32 },
}

impl From<UnsupportedFileSystem> for HarnessError {
    fn from(why: UnsupportedFileSystem) -> HarnessError { HarnessError::UnsupportedFileSystem { why } }
}

impl From<ConfigError> for HarnessError {
    fn from(why: ConfigError) -> HarnessError { HarnessError::Config { why } }
}
