use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about = "Render bar charts of static binary sizes from a CSV of measurements.",
    long_about = "Render bar charts of static binary sizes from a CSV of measurements. \
                  The input needs `name`, `nice` and `size` columns. Two SVG files are \
                  written: every entry on a log scale, and the entries of at most 1024 \
                  bytes on a linear scale."
)]
pub struct Args {
    /// CSV file with `name`, `nice` and `size` columns.
    #[arg()]
    input: PathBuf,

    /// Output SVG for the chart of all entries.
    #[arg()]
    all_output: PathBuf,

    /// Output SVG for the chart of entries up to 1024 bytes.
    #[arg()]
    tiny_output: PathBuf,
}

fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();

    if let Err(err) = sizechart::logging::init_logging() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match sizechart::plot_csv(&args.input, &args.all_output, &args.tiny_output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
