use colored::Colorize;

use crate::format::{format_count, format_megabytes, format_size};
use crate::record::{BYTES_PER_MB, FileRecord};
use crate::scanner::ScanStats;

const SIZE_HEADER: &str = "Size (MBs)";
const FILE_HEADER: &str = "File";

/// Render records as a box-drawn table: sizes right-aligned, paths left-aligned.
pub fn render_table(records: &[FileRecord]) -> String {
    let sizes: Vec<String> = records.iter().map(|r| format_megabytes(r.size)).collect();

    let size_width = sizes
        .iter()
        .map(|s| s.chars().count())
        .chain([SIZE_HEADER.len()])
        .max()
        .unwrap_or(SIZE_HEADER.len());
    let file_width = records
        .iter()
        .map(|r| r.location.chars().count())
        .chain([FILE_HEADER.len()])
        .max()
        .unwrap_or(FILE_HEADER.len());

    let bar = |c: &str, width: usize| c.repeat(width + 2);
    let mut out = String::new();

    out.push_str(&format!(
        "┏{}┳{}┓\n",
        bar("━", size_width),
        bar("━", file_width)
    ));
    out.push_str(&format!(
        "┃ {} ┃ {} ┃\n",
        format!("{:>size_width$}", SIZE_HEADER).magenta().bold(),
        format!("{:<file_width$}", FILE_HEADER).magenta().bold()
    ));
    out.push_str(&format!(
        "┡{}╇{}┩\n",
        bar("━", size_width),
        bar("━", file_width)
    ));
    for (size, record) in sizes.iter().zip(records) {
        out.push_str(&format!(
            "│ {:>size_width$} │ {:<file_width$} │\n",
            size, record.location
        ));
    }
    out.push_str(&format!(
        "└{}┴{}┘\n",
        bar("─", size_width),
        bar("─", file_width)
    ));

    out
}

/// One-line recap printed under the table.
pub fn summary_line(records: &[FileRecord], stats: &ScanStats) -> String {
    let total_mb: f64 = records.iter().map(|r| r.size).sum();
    let total_bytes = (total_mb * BYTES_PER_MB as f64).round() as u64;

    let mut line = format!(
        "{} Found {} file(s) totalling {} ({} directories, {} files reviewed",
        "=>".blue().bold(),
        format_count(records.len() as u64).cyan(),
        format_size(total_bytes).yellow().bold(),
        format_count(stats.directories),
        format_count(stats.files)
    );
    if stats.skipped > 0 {
        line.push_str(&format!(
            ", {} skipped",
            format_count(stats.skipped).red()
        ));
    }
    line.push(')');
    line
}

pub fn print_report(records: &[FileRecord], stats: &ScanStats) {
    print!("{}", render_table(records));
    println!("{}", summary_line(records, stats));
}
