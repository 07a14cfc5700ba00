use super::{mkfs_with, FsSpecificExt};
use fs_types::{FileSystem, FsckOutcome};

const FSCK_COMMAND: &str = "xfs_repair ";

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Xfs;

impl FsSpecificExt for Xfs {
    fn fs_type(&self) -> FileSystem { FileSystem::Xfs }

    fn mkfs_command(&self, device: &str) -> String { mkfs_with(FileSystem::Xfs, None, device) }

    fn fsck_command(&self, fs_path: &str) -> String { [FSCK_COMMAND, fs_path].concat() }

    /// Without `-n`, `xfs_repair` repairs what it finds and exits 0 on success.
    fn fsck_outcome(&self, status: i32) -> FsckOutcome {
        if status == 0 {
            FsckOutcome::Fixed
        } else {
            FsckOutcome::Check
        }
    }
}
