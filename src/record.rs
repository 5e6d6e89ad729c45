use serde::{Deserialize, Serialize};

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// One matched file. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Size in megabytes (bytes / 1024²)
    pub size: f64,
    /// Absolute path of the file
    pub location: String,
}

impl FileRecord {
    pub fn from_bytes(bytes: u64, location: impl Into<String>) -> Self {
        Self {
            size: bytes as f64 / BYTES_PER_MB as f64,
            location: location.into(),
        }
    }
}

/// Sort largest first. Stable, so equal sizes keep traversal order.
pub fn sort_by_size_desc(records: &mut [FileRecord]) {
    records.sort_by(|a, b| b.size.total_cmp(&a.size));
}
