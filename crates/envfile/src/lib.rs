//! Library for parsing environment files into an in-memory map.

#[macro_use]
extern crate log;

use std::{
    collections::BTreeMap,
    fs, io,
    path::Path,
};

#[derive(Debug)]
pub struct EnvFile {
    store: BTreeMap<String, String>,
}

impl EnvFile {
    /// Reads and parses the environment file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<EnvFile> {
        let path = path.as_ref();
        info!("reading env file at {:?}", path);
        let data = fs::read_to_string(path)?;
        Ok(EnvFile { store: parse(&data) })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        debug!("getting {} from env file", key);
        self.store.get(key).map(String::as_str)
    }
}

/// Blank lines, `#` comments, and lines without a `=` are skipped. The last
/// assignment to a key wins.
fn parse(data: &str) -> BTreeMap<String, String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let pos = line.find('=')?;
            let key = line[..pos].trim();
            if key.is_empty() {
                None
            } else {
                Some((key.to_owned(), line[pos + 1..].trim().to_owned()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    const SAMPLE: &str = r#"# crash test configuration
FS_TYPE=ext4
DEVICE = /dev/cow_ram0
TARGET=
not an assignment
=orphan

DEVICE=/dev/cow_ram1
"#;

    #[test]
    fn env_file_parse() {
        assert_eq!(parse(SAMPLE), {
            let mut map = BTreeMap::new();
            map.insert("FS_TYPE".into(), "ext4".into());
            map.insert("DEVICE".into(), "/dev/cow_ram1".into());
            map.insert("TARGET".into(), "".into());
            map
        });
    }

    #[test]
    fn env_file_read() {
        let tempdir = TempDir::new("fs_testing_envfile").unwrap();
        let path = tempdir.path().join("harness.conf");

        fs::File::create(&path).unwrap().write_all(SAMPLE.as_bytes()).unwrap();

        let env = EnvFile::new(&path).unwrap();
        assert_eq!(env.get("FS_TYPE"), Some("ext4"));
        assert_eq!(env.get("DEVICE"), Some("/dev/cow_ram1"));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn env_file_missing() {
        let tempdir = TempDir::new("fs_testing_envfile").unwrap();
        let why = EnvFile::new(tempdir.path().join("absent.conf")).unwrap_err();
        assert_eq!(why.kind(), io::ErrorKind::NotFound);
    }
}
