use fs_testing::{ConfigError, HarnessError, UnsupportedFileSystem};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(display = "a file system must be chosen with either --fs or --config")]
    NoFileSystem,
    #[error(display = "{}", why)]
    Harness { why: HarnessError },
    #[error(display = "no {} was given, and no config defines one", arg)]
    NoPath { arg: &'static str },
    #[error(display = "exit status '{}' is not an integer", value)]
    InvalidStatus { value: String },
}

impl From<HarnessError> for CliError {
    fn from(why: HarnessError) -> CliError { CliError::Harness { why } }
}

impl From<UnsupportedFileSystem> for CliError {
    fn from(why: UnsupportedFileSystem) -> CliError { CliError::Harness { why: why.into() } }
}

impl From<ConfigError> for CliError {
    fn from(why: ConfigError) -> CliError { CliError::Harness { why: why.into() } }
}
