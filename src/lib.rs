//! Filesystem-specific adaptation layer for crash consistency testing.
//!
//! The harness selects a file system by name, formats a device with it,
//! replays a crash, and finally runs that file system's checker. This crate
//! supplies the command lines for those steps and folds each checker's
//! exit status into a single [`FsckOutcome`] vocabulary.

#[macro_use]
extern crate err_derive;
#[macro_use]
extern crate log;

mod config;
mod errors;
mod logging;
mod tester;

pub use self::{
    config::{Config, ConfigError},
    errors::HarnessError,
    logging::log,
    tester::{CommandRunner, FsTester},
};
pub use fs_specific::{
    resolve, Btrfs, E2fsckStatus, Ext4, F2fs, FsSpecific, FsSpecificExt, Xfs,
};
pub use fs_types::{FileSystem, FsckOutcome, InvalidOutcome, UnsupportedFileSystem};
