use super::{fsck_with_auto_fix, mkfs_with, FsSpecificExt};
use fs_types::{FileSystem, FsckOutcome};

/// Remount read-only as soon as the kernel detects an error.
const REMOUNT_OPTIONS: &str = "errors=remount-ro";

// Lazy initialization defers inode table and journal zeroing to a kernel
// thread, which makes I/O timing after mkfs nondeterministic.
const MKFS_OPTIONS: &str = "-E lazy_itable_init=0,lazy_journal_init=0";

bitflags! {
    /// Exit status bits of `e2fsck`, as documented in fsck.ext4(8).
    pub struct E2fsckStatus: i32 {
        const CORRECTED = 0x01;
        const REBOOT = 0x02;
        const UNCORRECTED = 0x04;
        const OPERATIONAL = 0x08;
        const USAGE = 0x10;
        const CANCELED = 0x20;
        const LIBRARY = 0x80;
    }
}

impl E2fsckStatus {
    /// Reduces the status to an outcome, letting the most severe bit win.
    pub fn outcome(status: i32) -> FsckOutcome {
        let flags = E2fsckStatus::from_bits_truncate(status);

        let attention = E2fsckStatus::USAGE
            | E2fsckStatus::CANCELED
            | E2fsckStatus::LIBRARY
            | E2fsckStatus::OPERATIONAL;

        if flags.intersects(attention) {
            FsckOutcome::Check
        } else if flags.contains(E2fsckStatus::UNCORRECTED) {
            FsckOutcome::CheckUnfixed
        } else if flags.intersects(E2fsckStatus::CORRECTED | E2fsckStatus::REBOOT) {
            FsckOutcome::Fixed
        } else if status == 0 {
            FsckOutcome::Clean
        } else {
            FsckOutcome::Other
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Ext4;

impl FsSpecificExt for Ext4 {
    fn fs_type(&self) -> FileSystem { FileSystem::Ext4 }

    fn mkfs_command(&self, device: &str) -> String {
        mkfs_with(FileSystem::Ext4, Some(MKFS_OPTIONS), device)
    }

    fn post_replay_mount_options(&self) -> &'static str { REMOUNT_OPTIONS }

    fn fsck_command(&self, fs_path: &str) -> String { fsck_with_auto_fix(FileSystem::Ext4, fs_path) }

    fn fsck_outcome(&self, status: i32) -> FsckOutcome { E2fsckStatus::outcome(status) }
}
