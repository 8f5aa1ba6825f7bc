use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    ReadCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Plotters errors are generic over the backend, so only the message is kept.
    #[error("failed to draw {}: {message}", path.display())]
    Draw { path: PathBuf, message: String },

    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
