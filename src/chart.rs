//! Horizontal bar charts of binary sizes.
//!
//! Every chart is drawn onto the [`DrawingArea`] it is given, so the two
//! charts never share drawing state. The `render_*` functions wrap the
//! `draw_*` ones with an [`SVGBackend`] writing to a file.

use std::path::Path;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::record::{Record, SMALL_LIMIT};
use crate::{Error, Result};

pub const ALL_TITLE: &str = "All Static Binary Sizes";
pub const SMALL_TITLE: &str = "Tiny Static Binary Sizes (<1k)";

const Y_DESC: &str = "Language and Build Method";

const ALL_SIZE: (u32, u32) = (640, 640);
const SMALL_SIZE: (u32, u32) = (640, 480);

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const BAR_HALF_HEIGHT: f64 = 0.4;

const FONT: &str = "sans-serif";
/// Pixels per typographic point at 100 dpi.
const PX_PER_PT: f64 = 100.0 / 72.0;
const TITLE_FONT_SIZE: f64 = 9.0 * PX_PER_PT;
const DESC_FONT_SIZE: f64 = 7.0 * PX_PER_PT;
const TICK_FONT_SIZE: f64 = 5.0 * PX_PER_PT;

type DrawResult<DB> =
    std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Draw every record with a log-scaled size axis and write it to `output_path`.
pub fn render_all(records: &[Record], output_path: &Path) -> Result<()> {
    let area = SVGBackend::new(output_path, ALL_SIZE).into_drawing_area();
    draw_all(records, &area)
        .and_then(|()| area.present())
        .map_err(|e| draw_error(output_path, e))?;

    info!(output = %output_path.display(), bars = records.len(), "wrote chart");
    Ok(())
}

/// Draw `records` with a linear size axis and write it to `output_path`.
///
/// The caller passes the small subset, see [`crate::filter_small`].
pub fn render_small(records: &[Record], output_path: &Path) -> Result<()> {
    let area = SVGBackend::new(output_path, SMALL_SIZE).into_drawing_area();
    draw_small(records, &area)
        .and_then(|()| area.present())
        .map_err(|e| draw_error(output_path, e))?;

    info!(output = %output_path.display(), bars = records.len(), "wrote chart");
    Ok(())
}

pub fn draw_all<DB: DrawingBackend>(
    records: &[Record],
    area: &DrawingArea<DB, Shift>,
) -> DrawResult<DB> {
    area.fill(&WHITE)?;

    // Log axis starts at 1, and runs up to the next power of ten above the
    // largest size.
    let largest = records.iter().map(|r| r.size).max().unwrap_or(1).max(1) as f64;
    let upper = 10f64.powf(largest.log10().floor() + 1.0);

    let labels = tick_labels(records);
    let mut chart = ChartBuilder::on(area)
        .caption(ALL_TITLE, (FONT, TITLE_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(160)
        .build_cartesian_2d((1f64..upper).log_scale(), bar_rows(records.len()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Binary Size (bytes, log scale)")
        .y_desc(Y_DESC)
        .axis_desc_style((FONT, DESC_FONT_SIZE))
        .x_label_style((FONT, TICK_FONT_SIZE))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_labels(records.len() + 1)
        .y_label_style((FONT, TICK_FONT_SIZE))
        .y_label_formatter(&|y| tick_label(&labels, *y))
        .draw()?;

    draw_bars(&mut chart, records, 1.0)
}

pub fn draw_small<DB: DrawingBackend>(
    records: &[Record],
    area: &DrawingArea<DB, Shift>,
) -> DrawResult<DB> {
    area.fill(&WHITE)?;

    let largest = records.iter().map(|r| r.size).max().unwrap_or(0);
    let upper = largest.max(SMALL_LIMIT) as f64;

    let labels = tick_labels(records);
    let mut chart = ChartBuilder::on(area)
        .caption(SMALL_TITLE, (FONT, TITLE_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(160)
        .build_cartesian_2d(0f64..upper, bar_rows(records.len()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Binary Size (bytes)")
        .y_desc(Y_DESC)
        .axis_desc_style((FONT, DESC_FONT_SIZE))
        .x_label_style((FONT, TICK_FONT_SIZE))
        .y_labels(records.len() + 1)
        .y_label_style((FONT, TICK_FONT_SIZE))
        .y_label_formatter(&|y| tick_label(&labels, *y))
        .draw()?;

    draw_bars(&mut chart, records, 0.0)
}

/// One bar per record, the first record on the bottom row.
fn draw_bars<DB, X>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, RangedCoordf64>>,
    records: &[Record],
    baseline: f64,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64>,
{
    let style = BAR_COLOR.mix(0.5).filled();

    chart.draw_series(records.iter().enumerate().map(|(row, record)| {
        let row = row as f64;
        let end = (record.size as f64).max(baseline);
        Rectangle::new(
            [(baseline, row - BAR_HALF_HEIGHT), (end, row + BAR_HALF_HEIGHT)],
            style,
        )
    }))?;

    Ok(())
}

/// Row `i` is centred on `i`. An empty chart still gets one (blank) row.
fn bar_rows(count: usize) -> std::ops::Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

fn tick_labels(records: &[Record]) -> Vec<String> {
    records.iter().map(Record::label).collect()
}

/// Label for a y tick, blank unless the tick sits on a row centre.
fn tick_label(labels: &[String], y: f64) -> String {
    let row = y.round();
    if row < 0.0 || (y - row).abs() > 1e-6 {
        return String::new();
    }
    labels.get(row as usize).cloned().unwrap_or_default()
}

fn draw_error<E>(path: &Path, error: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Draw {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
