use colored::Colorize;
use tracing::info;

use crate::config::Config;
use crate::error::RunError;
use crate::export::write_csv;
use crate::progress::ScanProgress;
use crate::record::{FileRecord, sort_by_size_desc};
use crate::reporter::print_report;
use crate::scanner::scan_files;

#[derive(Debug)]
pub enum Outcome {
    /// Nothing passed the filter; no table, and a header-only CSV if requested
    NoResults,
    /// The records shown in the table (and written to CSV, if requested)
    Reported(Vec<FileRecord>),
}

/// Scan, sort, print and optionally export. Progress is finished before returning.
pub fn run(config: &Config, progress: &dyn ScanProgress) -> Result<Outcome, RunError> {
    let scan = scan_files(&config.base, &config.filter, progress);
    progress.finish();
    let scan = scan?;

    let mut records = scan.records;
    if records.is_empty() {
        println!("{}", "No results".green().bold());
        export(config, &records)?;
        return Ok(Outcome::NoResults);
    }

    sort_by_size_desc(&mut records);
    print_report(&records, &scan.stats);
    export(config, &records)?;

    Ok(Outcome::Reported(records))
}

fn export(config: &Config, records: &[FileRecord]) -> Result<(), RunError> {
    let Some(path) = &config.output else {
        return Ok(());
    };

    write_csv(path, records)?;
    info!("wrote {} record(s) to {}", records.len(), path.display());
    println!(
        "{} Saved results to {}",
        "=>".green().bold(),
        path.display().to_string().bold()
    );
    Ok(())
}
