use crate::errors::HarnessError;
use envfile::EnvFile;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Selects the file system under test and the device it lives on.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Canonical file system name, such as `ext4`.
    pub fs_type: String,
    /// Block device that is formatted and later checked.
    pub device:  PathBuf,
    /// Path handed to the checker, when it differs from `device`.
    pub target:  Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(display = "unable to read config at {:?}: {}", path, why)]
    Read { path: PathBuf, why: io::Error },
    #[error(display = "config at {:?} does not define {}", path, key)]
    MissingKey { path: PathBuf, key: &'static str },
}

impl Config {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(fs_type: S, device: P) -> Self {
        Config { fs_type: fs_type.into(), device: device.into(), target: None }
    }

    pub fn target<P: Into<PathBuf>>(mut self, target: P) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Reads the `FS_TYPE`, `DEVICE`, and optional `TARGET` keys from an env file.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let env = EnvFile::new(path)
            .map_err(|why| ConfigError::Read { path: path.to_path_buf(), why })?;

        let required = |key: &'static str| {
            env.get(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingKey { path: path.to_path_buf(), key })
        };

        let mut config = Config::new(required("FS_TYPE")?, required("DEVICE")?);
        if let Some(target) = env.get("TARGET").filter(|value| !value.is_empty()) {
            config = config.target(target);
        }

        Ok(config)
    }

    /// The path that the checker should inspect.
    pub fn fsck_path(&self) -> &Path { self.target.as_ref().unwrap_or(&self.device) }

    /// The device, as it will be written into a command line.
    pub fn device_str(&self) -> Result<&str, HarnessError> { command_path(&self.device) }

    /// The checker's path, as it will be written into a command line.
    pub fn fsck_path_str(&self) -> Result<&str, HarnessError> { command_path(self.fsck_path()) }
}

/// Commands are plain text, so a path is only usable when it is valid UTF-8.
fn command_path(path: &Path) -> Result<&str, HarnessError> {
    path.to_str().ok_or_else(|| HarnessError::NonUtf8Path { path: path.to_path_buf() })
}
