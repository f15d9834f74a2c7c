//! On-disk fixtures for round-trip tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HELLO: &[u8] = b"hello world\n";

/// Temp dir holding `test.txt` and `sub/dir/test file.txt`, both containing [`HELLO`].
pub fn hello_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test.txt"), HELLO).unwrap();
    let nested = dir.path().join("sub").join("dir");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("test file.txt"), HELLO).unwrap();
    dir
}

/// Absolute path as a `/`-separated string suitable for a `file:` URL.
pub fn url_path(path: &Path) -> String {
    let s = path.to_str().unwrap().replace('\\', "/");
    if s.starts_with('/') {
        s
    } else {
        format!("/{s}")
    }
}

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
