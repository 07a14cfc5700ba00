use super::{mkfs_with, FsSpecificExt};
use fs_types::{FileSystem, FsckOutcome};

const FSCK_COMMAND: &str = "btrfs check ";

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Btrfs;

impl FsSpecificExt for Btrfs {
    fn fs_type(&self) -> FileSystem { FileSystem::Btrfs }

    fn mkfs_command(&self, device: &str) -> String { mkfs_with(FileSystem::Btrfs, None, device) }

    fn fsck_command(&self, fs_path: &str) -> String { [FSCK_COMMAND, fs_path].concat() }

    /// `btrfs check` exits 0 when nothing is wrong and 1 when it found
    /// something. It does not repair without `--repair`, which is not passed.
    fn fsck_outcome(&self, status: i32) -> FsckOutcome {
        if status == 0 {
            FsckOutcome::Clean
        } else {
            FsckOutcome::CheckUnfixed
        }
    }
}
