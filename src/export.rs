use std::io;
use std::path::Path;

use crate::error::ExportError;
use crate::record::FileRecord;

/// Write records as CSV with a `size,location` header, in the given order.
pub fn write_csv(path: &Path, records: &[FileRecord]) -> Result<(), ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    write_records(&mut writer, records).map_err(csv_err)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn write_records<W: io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[FileRecord],
) -> Result<(), csv::Error> {
    // serialize() only emits the header alongside the first row
    if records.is_empty() {
        writer.write_record(["size", "location"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    Ok(())
}
