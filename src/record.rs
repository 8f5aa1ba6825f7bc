use std::path::Path;

use crate::{Error, Result};

/// Entries at or below this many bytes go into the tiny chart.
pub const SMALL_LIMIT: u64 = 1024;

/// One row of the measurements CSV.
///
/// Fields are matched by header name, so column order in the file does not
/// matter and extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize)]
pub struct Record {
    pub name: String,
    pub size: u64,
    /// Human-readable size, e.g. `1.5k`.
    pub nice: String,
}

impl Record {
    /// Tick label for this record's bar.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.nice)
    }
}

/// Read every row of the CSV at `path`, last row first.
pub fn read_csv(path: &Path) -> Result<Vec<Record>> {
    let read_error = |source| Error::ReadCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_error)?;
    let mut records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Record>, _>>()
        .map_err(read_error)?;
    records.reverse();

    Ok(records)
}

pub fn filter_small(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.size <= SMALL_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use std::fs;

    fn record(name: &str, nice: &str, size: u64) -> Record {
        Record {
            name: name.to_string(),
            size,
            nice: nice.to_string(),
        }
    }

    fn write_input(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sizes.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_csv_reverses_file_order() {
        let (_dir, path) = write_input("name,nice,size\na,x,2000\nb,y,500\nc,z,7\n");

        let records = read_csv(&path).unwrap();

        assert_eq!(
            records,
            vec![record("c", "z", 7), record("b", "y", 500), record("a", "x", 2000)]
        );
    }

    #[test]
    fn test_read_csv_matches_columns_by_header() {
        let (_dir, path) = write_input("name,size,nice,extra\nasm,312,312B,ignored\n");

        let records = read_csv(&path).unwrap();

        assert_eq!(records, vec![record("asm", "312B", 312)]);
    }

    #[test]
    fn test_read_csv_header_only_is_empty() {
        let (_dir, path) = write_input("name,nice,size\n");

        assert!(read_csv(&path).unwrap().is_empty());
    }

    #[rstest]
    #[case::missing_size_column("name,nice\na,x\n")]
    #[case::size_not_an_integer("name,nice,size\na,x,big\n")]
    #[case::short_row("name,nice,size\na,x\n")]
    fn test_read_csv_rejects_malformed_input(#[case] contents: &str) {
        let (_dir, path) = write_input(contents);

        let err = read_csv(&path).unwrap_err();

        assert!(matches!(err, Error::ReadCsv { .. }), "{err:?}");
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = read_csv(&path).unwrap_err();

        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_filter_small_keeps_only_tiny_entries() {
        let records = vec![record("a", "x", 2000), record("b", "y", 500)];

        assert_eq!(filter_small(&records), vec![record("b", "y", 500)]);
    }

    #[test]
    fn test_filter_small_preserves_order_and_includes_limit() {
        let records = vec![
            record("a", "1.0k", 1024),
            record("b", "1.0k", 1025),
            record("c", "0B", 0),
            record("d", "1.2k", 1300),
            record("e", "9B", 9),
        ];

        let small: Vec<_> = filter_small(&records)
            .into_iter()
            .map(|record| record.name)
            .collect();

        assert_eq!(small, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(record("asm-opt", "1.5k", 1536).label(), "asm-opt (1.5k)");
    }
}
