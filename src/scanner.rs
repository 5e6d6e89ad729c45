use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::progress::ScanProgress;
use crate::record::{BYTES_PER_MB, FileRecord};

/// What a file has to satisfy to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Strictly larger than this many megabytes
    MinimumSize { megabytes: u64 },
    /// File name matches a pattern. Not implemented yet.
    NamePattern(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub directories: u64,
    pub files: u64,
    /// Entries dropped because they could not be read or stat'ed
    pub skipped: u64,
}

#[derive(Debug)]
pub struct Scan {
    pub records: Vec<FileRecord>,
    pub stats: ScanStats,
}

/// Walk `base` and collect every file passing `filter`, in traversal order.
///
/// Per-entry failures (permission errors, broken links, files deleted
/// mid-walk) are logged and skipped. Directory symlinks are not followed.
pub fn scan_files(
    base: &Path,
    filter: &Filter,
    progress: &dyn ScanProgress,
) -> Result<Scan, ScanError> {
    let threshold = match filter {
        Filter::MinimumSize { megabytes } => megabytes.saturating_mul(BYTES_PER_MB),
        Filter::NamePattern(_) => return Err(ScanError::Unsupported("name-pattern search")),
    };

    if !base.is_dir() {
        return Err(ScanError::InvalidBase(base.to_path_buf()));
    }

    debug!(base = %base.display(), threshold, "starting scan");

    let mut records = Vec::new();
    let mut stats = ScanStats::default();

    for entry in WalkDir::new(base) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                stats.skipped += 1;
                warn!("skipping {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            stats.directories += 1;
            progress.update(&stats);
            continue;
        }

        let path = entry.path();
        // Follows file symlinks, so a dangling link fails here
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                stats.skipped += 1;
                warn!("could not read size of {}: {}", path.display(), e);
                continue;
            }
        };
        if meta.is_dir() {
            continue;
        }

        stats.files += 1;
        progress.update(&stats);

        if meta.len() > threshold {
            records.push(FileRecord::from_bytes(meta.len(), path.to_string_lossy()));
        }
    }

    info!(
        directories = stats.directories,
        files = stats.files,
        skipped = stats.skipped,
        matches = records.len(),
        "scan complete"
    );

    Ok(Scan { records, stats })
}
