use super::{fsck_with_auto_fix, mkfs_with, FsSpecificExt};
use fs_types::{FileSystem, FsckOutcome};

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct F2fs;

impl FsSpecificExt for F2fs {
    fn fs_type(&self) -> FileSystem { FileSystem::F2fs }

    fn mkfs_command(&self, device: &str) -> String { mkfs_with(FileSystem::F2fs, None, device) }

    fn fsck_command(&self, fs_path: &str) -> String { fsck_with_auto_fix(FileSystem::F2fs, fs_path) }

    /// `fsck.f2fs` exits 0 once a run completes, whether or not it repaired
    /// anything, and -1 on failure. A completed run is reported as `Fixed`.
    ///
    /// # Known Limitation
    ///
    /// A clean file system is also reported as `Fixed`; telling the two apart
    /// requires parsing the checker's output.
    fn fsck_outcome(&self, status: i32) -> FsckOutcome {
        if status == 0 {
            FsckOutcome::Fixed
        } else {
            FsckOutcome::Check
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f2fs_commands() {
        assert_eq!(F2fs.mkfs_command("/dev/loop0"), "mkfs -t f2fs /dev/loop0");
        assert_eq!(F2fs.fsck_command("/dev/cow_ram0"), "fsck -T -t f2fs /dev/cow_ram0 -- -y");
        assert_eq!(F2fs.post_replay_mount_options(), "");
    }

    #[test]
    fn f2fs_outcomes() {
        assert_eq!(F2fs.fsck_outcome(0), FsckOutcome::Fixed);
        assert_eq!(F2fs.fsck_outcome(1), FsckOutcome::Check);
        assert_eq!(F2fs.fsck_outcome(-1), FsckOutcome::Check);
        assert_eq!(F2fs.fsck_outcome(255), FsckOutcome::Check);
    }
}
