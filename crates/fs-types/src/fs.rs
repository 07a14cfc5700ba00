use std::{fmt, str::FromStr};

/// Describes a file system that the harness knows how to create and check.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum FileSystem {
    Ext4,
    Btrfs,
    F2fs,
    Xfs,
}

/// Returned when a file system name does not match any supported file system.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error(display = "unsupported file system: '{}'", name)]
pub struct UnsupportedFileSystem {
    pub name: String,
}

impl FileSystem {
    /// Every supported file system, in declaration order.
    pub const ALL: [FileSystem; 4] =
        [FileSystem::Ext4, FileSystem::Btrfs, FileSystem::F2fs, FileSystem::Xfs];

    /// The canonical token, as passed to `mkfs -t` and `fsck -t`.
    pub fn as_str(self) -> &'static str { self.into() }
}

impl FromStr for FileSystem {
    type Err = UnsupportedFileSystem;

    /// Matching is exact: `"EXT4"` and `" ext4"` are rejected.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let type_ = match string {
            "ext4" => FileSystem::Ext4,
            "btrfs" => FileSystem::Btrfs,
            "f2fs" => FileSystem::F2fs,
            "xfs" => FileSystem::Xfs,
            _ => return Err(UnsupportedFileSystem { name: string.into() }),
        };
        Ok(type_)
    }
}

impl From<FileSystem> for &'static str {
    fn from(val: FileSystem) -> Self {
        match val {
            FileSystem::Ext4 => "ext4",
            FileSystem::Btrfs => "btrfs",
            FileSystem::F2fs => "f2fs",
            FileSystem::Xfs => "xfs",
        }
    }
}

impl fmt::Display for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> { f.write_str(self.as_str()) }
}
