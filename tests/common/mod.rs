// Shared test fixtures for integration tests
#![allow(dead_code)]

use rust_fsas::Config;
use rust_fsas::record::BYTES_PER_MB;
use rust_fsas::scanner::Filter;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a sparse file of exactly `bytes` bytes, creating parent directories
pub fn sized_file(root: &Path, rel: &str, bytes: u64) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(&path).unwrap();
    file.set_len(bytes).unwrap();
    path
}

/// A tree with files around a 1 MB threshold:
///
/// ```text
/// big.bin            3 MB
/// exact.bin          1 MB exactly
/// small.txt          10 bytes
/// nested/mid.bin     2 MB
/// nested/deep/a.bin  1 MB + 1 byte
/// ```
pub fn create_test_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    sized_file(root, "big.bin", 3 * BYTES_PER_MB);
    sized_file(root, "exact.bin", BYTES_PER_MB);
    sized_file(root, "small.txt", 10);
    sized_file(root, "nested/mid.bin", 2 * BYTES_PER_MB);
    sized_file(root, "nested/deep/a.bin", BYTES_PER_MB + 1);
    dir
}

pub fn size_config(base: &Path, megabytes: u64, output: Option<PathBuf>) -> Config {
    Config {
        base: base.to_path_buf(),
        filter: Filter::MinimumSize { megabytes },
        output,
        quiet: true,
    }
}

pub fn location(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
