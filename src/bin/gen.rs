//! Measure the binaries in a directory, write their sizes as CSV and chart them.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about = "Measure a directory of binaries, write a size CSV and render its charts."
)]
pub struct Args {
    /// Where to write the `name,size,nice` CSV.
    #[arg()]
    csv_output: PathBuf,

    /// Output SVG for the chart of all entries.
    #[arg()]
    all_output: PathBuf,

    /// Output SVG for the chart of entries up to 1024 bytes.
    #[arg()]
    tiny_output: PathBuf,

    /// Directory holding the binaries to measure.
    #[arg(long, default_value = "/out/bin")]
    bin_dir: PathBuf,
}

fn run(args: &Args) -> sizechart::Result<()> {
    let records = sizechart::survey::scan_dir(&args.bin_dir)?;
    info!(dir = %args.bin_dir.display(), binaries = records.len(), "scanned binaries");

    sizechart::survey::write_csv(&args.csv_output, &records)?;
    sizechart::plot_csv(&args.csv_output, &args.all_output, &args.tiny_output)
}

fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();

    if let Err(err) = sizechart::logging::init_logging() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
