//! Measure a directory of built binaries and write the CSV the charts read.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::nice::nice_size;
use crate::{Error, Record, Result};

/// Every regular file directly inside `dir`, largest first.
pub fn scan_dir(dir: &Path) -> Result<Vec<Record>> {
    let scan_error = |source| Error::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut records = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        let metadata = entry.metadata().map_err(scan_error)?;
        if !metadata.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let size = metadata.len();
        debug!(file = %name, size, "measured binary");

        records.push(Record {
            name,
            size,
            nice: nice_size(size),
        });
    }

    // Name breaks ties so the output does not depend on directory order.
    records.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));

    Ok(records)
}

/// Write `records` with a `name,size,nice` header.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let write_error = |source| Error::WriteCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
    for record in records {
        writer.serialize(record).map_err(write_error)?;
    }
    writer.flush().map_err(|e| write_error(e.into()))?;

    Ok(())
}
