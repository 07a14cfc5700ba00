//! File system specific behavior for the crash consistency harness.
//!
//! Each supported file system knows how to format a device, which mount
//! options to apply after a crash has been replayed, how to invoke its
//! checker, and how to reduce that checker's exit status to a
//! [`FsckOutcome`]. Nothing here executes a command: command lines are
//! returned as text and exit statuses are handed back for classification.

#[macro_use]
extern crate bitflags;

mod btrfs;
mod ext4;
mod f2fs;
mod xfs;

pub use self::{btrfs::Btrfs, ext4::{E2fsckStatus, Ext4}, f2fs::F2fs, xfs::Xfs};
pub use fs_types::{FileSystem, FsckOutcome, InvalidOutcome, UnsupportedFileSystem};

const MKFS_START: &str = "mkfs -t ";
const FSCK_COMMAND: &str = "fsck -T -t ";
const FSCK_AUTO_FIX: &str = " -- -y";

/// Operations that every supported file system provides.
pub trait FsSpecificExt {
    /// The file system that this behavior is bound to.
    fn fs_type(&self) -> FileSystem;

    /// Command line which creates a fresh file system on `device`.
    fn mkfs_command(&self, device: &str) -> String;

    /// Mount options to use when next mounting the device after a replay.
    ///
    /// An empty string requests the default mount behavior.
    fn post_replay_mount_options(&self) -> &'static str { "" }

    /// Command line which runs this file system's checker against `fs_path`.
    fn fsck_command(&self, fs_path: &str) -> String;

    /// Reduces the checker's raw exit status to an outcome. Total for every `i32`.
    fn fsck_outcome(&self, status: i32) -> FsckOutcome;

    /// The canonical name of the file system, used for log correlation and reports.
    fn fs_type_str(&self) -> &'static str { self.fs_type().into() }
}

/// A behavior bound to exactly one supported file system.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum FsSpecific {
    Ext4(Ext4),
    Btrfs(Btrfs),
    F2fs(F2fs),
    Xfs(Xfs),
}

/// Obtains the behavior for the file system named by `name`.
///
/// Unknown names yield `None`; deciding whether that is fatal is left to the caller.
pub fn resolve(name: &str) -> Option<FsSpecific> {
    name.parse::<FileSystem>().ok().map(FsSpecific::from)
}

impl From<FileSystem> for FsSpecific {
    fn from(fs: FileSystem) -> Self {
        match fs {
            FileSystem::Ext4 => FsSpecific::Ext4(Ext4),
            FileSystem::Btrfs => FsSpecific::Btrfs(Btrfs),
            FileSystem::F2fs => FsSpecific::F2fs(F2fs),
            FileSystem::Xfs => FsSpecific::Xfs(Xfs),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $fs:ident => $call:expr) => {
        match $self {
            FsSpecific::Ext4($fs) => $call,
            FsSpecific::Btrfs($fs) => $call,
            FsSpecific::F2fs($fs) => $call,
            FsSpecific::Xfs($fs) => $call,
        }
    };
}

impl FsSpecificExt for FsSpecific {
    fn fs_type(&self) -> FileSystem { dispatch!(self, fs => fs.fs_type()) }

    fn mkfs_command(&self, device: &str) -> String {
        dispatch!(self, fs => fs.mkfs_command(device))
    }

    fn post_replay_mount_options(&self) -> &'static str {
        dispatch!(self, fs => fs.post_replay_mount_options())
    }

    fn fsck_command(&self, fs_path: &str) -> String {
        dispatch!(self, fs => fs.fsck_command(fs_path))
    }

    fn fsck_outcome(&self, status: i32) -> FsckOutcome {
        dispatch!(self, fs => fs.fsck_outcome(status))
    }
}

/// `mkfs -t <fs> [options] <device>`
fn mkfs_with(fs: FileSystem, options: Option<&str>, device: &str) -> String {
    let mut command = [MKFS_START, fs.as_str()].concat();
    command.push(' ');
    if let Some(options) = options {
        command.push_str(options);
        command.push(' ');
    }
    command.push_str(device);
    command
}

/// `fsck -T -t <fs> <path> -- -y`, for checkers that repair without prompting when given `-y`.
fn fsck_with_auto_fix(fs: FileSystem, fs_path: &str) -> String {
    [FSCK_COMMAND, fs.as_str(), " ", fs_path, FSCK_AUTO_FIX].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known() {
        for name in &["ext4", "btrfs", "f2fs", "xfs"] {
            let fs = resolve(name).expect("known file system was not resolved");
            assert_eq!(fs.fs_type_str(), *name);
            assert_eq!(fs.fs_type().as_str(), *name);
        }
    }

    #[test]
    fn resolve_unknown() {
        for name in &["", "EXT4", "Ext4", "BTRFS", "ext3", "ntfs", "xfs\n", "f2fs "] {
            assert!(resolve(name).is_none(), "{:?} should not resolve", name);
        }
    }

    #[test]
    fn resolve_matches_conversion() {
        for &fs in &FileSystem::ALL {
            assert_eq!(resolve(fs.as_str()), Some(FsSpecific::from(fs)));
        }
    }

    #[test]
    fn names_embedded_in_commands() {
        for &fs in &FileSystem::ALL {
            let behavior = FsSpecific::from(fs);
            let mkfs = behavior.mkfs_command("/dev/loop0");
            assert!(mkfs.starts_with(&format!("mkfs -t {} ", behavior.fs_type_str())), "{}", mkfs);
            assert!(mkfs.ends_with(" /dev/loop0"), "{}", mkfs);
        }
    }

    #[test]
    fn single_post_replay_option() {
        let with_options = FileSystem::ALL
            .iter()
            .map(|&fs| FsSpecific::from(fs))
            .filter(|fs| !fs.post_replay_mount_options().is_empty())
            .map(|fs| fs.fs_type())
            .collect::<Vec<_>>();

        assert_eq!(with_options, vec![FileSystem::Ext4]);
    }

    #[test]
    fn auto_fix_flag() {
        for &fs in &FileSystem::ALL {
            let command = FsSpecific::from(fs).fsck_command("/dev/loop1");
            let expected = fs == FileSystem::Ext4 || fs == FileSystem::F2fs;
            assert_eq!(command.contains("-- -y"), expected, "{}", command);
            assert!(command.contains("/dev/loop1"), "{}", command);
        }
    }

    #[test]
    fn fsck_outcome_is_total() {
        use std::collections::BTreeSet;

        let mut statuses = vec![i32::MIN, i32::MAX, -256, -129, -1, 0x100, 0x140, 0x4000_0000];
        statuses.extend(-64..=512);

        for &fs in &FileSystem::ALL {
            let behavior = FsSpecific::from(fs);
            let seen = statuses
                .iter()
                .map(|&status| behavior.fsck_outcome(status))
                .collect::<BTreeSet<_>>();
            let expected = match fs {
                FileSystem::Ext4 => vec![
                    FsckOutcome::Clean,
                    FsckOutcome::Fixed,
                    FsckOutcome::CheckUnfixed,
                    FsckOutcome::Check,
                    FsckOutcome::Other,
                ],
                FileSystem::Btrfs => vec![FsckOutcome::Clean, FsckOutcome::CheckUnfixed],
                FileSystem::F2fs | FileSystem::Xfs => vec![FsckOutcome::Fixed, FsckOutcome::Check],
            };

            assert_eq!(seen, expected.into_iter().collect::<BTreeSet<_>>(), "{}", fs);
        }
    }

    #[test]
    fn nonzero_never_clean() {
        for &fs in &FileSystem::ALL {
            let behavior = FsSpecific::from(fs);
            for status in (-300..0).chain(1..300) {
                assert_ne!(behavior.fsck_outcome(status), FsckOutcome::Clean, "{} {}", fs, status);
            }
        }
    }
}
