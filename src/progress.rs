//! Progress reporting for the directory walk
//!
//! Keeps the scanner free of terminal concerns (indicatif).

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

use crate::format::format_count;
use crate::scanner::ScanStats;

pub trait ScanProgress {
    fn update(&self, stats: &ScanStats);
    fn finish(&self);
}

/// Indicatif spinner on stderr for CLI usage
pub struct SpinnerProgress(ProgressBar);

impl SpinnerProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Pending...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Self(pb)
    }

    /// Log writer that hides this spinner while a line is printed
    pub fn log_writer(&self) -> SuspendingWriter {
        SuspendingWriter(self.0.clone())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanProgress for SpinnerProgress {
    fn update(&self, stats: &ScanStats) {
        self.0.set_message(status_line(stats));
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

/// stderr writer for `tracing_subscriber` that clears the spinner around each write,
/// so log lines don't interleave with spinner frames.
#[derive(Clone)]
pub struct SuspendingWriter(ProgressBar);

impl Write for SuspendingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stderr().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.suspend(|| io::stderr().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for SuspendingWriter {
    type Writer = SuspendingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// No-op progress for quiet mode and tests
pub struct NoopProgress;

impl ScanProgress for NoopProgress {
    fn update(&self, _stats: &ScanStats) {}
    fn finish(&self) {}
}

pub fn status_line(stats: &ScanStats) -> String {
    format!(
        "Reviewed | Directories: {} - Files: {}",
        format_count(stats.directories),
        format_count(stats.files)
    )
}
