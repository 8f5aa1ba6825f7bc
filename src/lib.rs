//! Bar charts of static binary sizes.
//!
//! A CSV of measurements (`name`, `nice`, `size`) is read into [`Record`]s
//! and drawn twice: every entry on a log scale, and the entries of at most
//! 1024 bytes on a linear scale.

use std::path::Path;

pub mod chart;
pub mod error;
pub mod logging;
pub mod nice;
pub mod record;
pub mod survey;

pub use error::{Error, Result};
pub use record::{filter_small, read_csv, Record};

/// Read `input` and write the "all" and "tiny" charts.
///
/// The input is read completely before either output is created.
pub fn plot_csv(input: &Path, all_output: &Path, tiny_output: &Path) -> Result<()> {
    let records = read_csv(input)?;
    tracing::info!(input = %input.display(), records = records.len(), "read measurements");

    chart::render_all(&records, all_output)?;

    let small = filter_small(&records);
    chart::render_small(&small, tiny_output)?;

    Ok(())
}
