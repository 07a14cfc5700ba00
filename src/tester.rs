use crate::{config::Config, errors::HarnessError};
use fs_specific::{resolve, FsSpecific, FsSpecificExt};
use fs_types::{FsckOutcome, UnsupportedFileSystem};
use std::io;

/// Executes a command line on behalf of the harness, returning its raw exit status.
///
/// Process creation belongs to the implementor. Statuses are passed through
/// untouched, so that they may be classified by the file system under test.
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> io::Result<i32>;
}

impl<F: FnMut(&str) -> io::Result<i32>> CommandRunner for F {
    fn run(&mut self, command: &str) -> io::Result<i32> { self(command) }
}

/// Drives formatting and checking of the device under test.
pub struct FsTester<R> {
    fs:      FsSpecific,
    config:  Config,
    runner:  R,
    history: Vec<FsckOutcome>,
}

impl<R: CommandRunner> FsTester<R> {
    /// Fails early when the configured file system is not supported.
    pub fn new(config: Config, runner: R) -> Result<Self, HarnessError> {
        let fs = resolve(&config.fs_type)
            .ok_or_else(|| UnsupportedFileSystem { name: config.fs_type.clone() })?;

        info!("testing {} on {:?}", fs.fs_type_str(), config.device);
        Ok(FsTester { fs, config, runner, history: Vec::new() })
    }

    pub fn fs(&self) -> &FsSpecific { &self.fs }

    pub fn config(&self) -> &Config { &self.config }

    /// Creates a fresh file system on the configured device.
    pub fn format(&mut self) -> Result<(), HarnessError> {
        let command = self.fs.mkfs_command(self.config.device_str()?);
        let status = self.run(&command)?;
        if status == 0 {
            Ok(())
        } else {
            Err(HarnessError::MkfsFailed { command, status })
        }
    }

    /// Mount options for the first mount after a crash has been replayed.
    pub fn post_replay_mount_options(&self) -> &'static str {
        self.fs.post_replay_mount_options()
    }

    /// Runs the checker against the configured path and classifies its exit status.
    pub fn check(&mut self) -> Result<FsckOutcome, HarnessError> {
        let command = self.fs.fsck_command(self.config.fsck_path_str()?);
        let status = self.run(&command)?;
        let outcome = self.fs.fsck_outcome(status);

        if outcome == FsckOutcome::Other {
            warn!("{} exit status {} is undocumented for {}", command, status, self.fs.fs_type_str());
        } else {
            info!("{} check: {}", self.fs.fs_type_str(), outcome);
        }

        self.history.push(outcome);
        Ok(outcome)
    }

    /// Outcomes of every check so far, oldest first.
    pub fn check_history(&self) -> &[FsckOutcome] { &self.history }

    pub fn worst_outcome(&self) -> Option<FsckOutcome> {
        FsckOutcome::worst(self.history.iter().cloned())
    }

    pub fn into_runner(self) -> R { self.runner }

    fn run(&mut self, command: &str) -> Result<i32, HarnessError> {
        debug!("running {}", command);
        let status = self
            .runner
            .run(command)
            .map_err(|why| HarnessError::Runner { command: command.into(), why })?;
        debug!("{} exited with {}", command, status);
        Ok(status)
    }
}
