//! Command line front end for barcodesheet

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use barcodesheet::layout::LayoutConfig;
use barcodesheet::reader::SheetReader;
use barcodesheet::transcoder::transcode;

/// Insert EAN barcode images into a price-list spreadsheet
#[derive(Parser, Debug)]
#[command(name = "barcodesheet", version, about)]
struct Args {
    /// Input spreadsheet (.xlsx, .xls or .ods; first sheet only)
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "preisliste_mit_barcodes.xlsx")]
    output: PathBuf,

    /// Column holding the EAN code
    #[arg(long, default_value = "B")]
    source_column: String,

    /// Column to receive barcode images
    #[arg(long, default_value = "G")]
    destination_column: String,

    /// Row to receive the "Barcode" label (1-based)
    #[arg(long, default_value_t = 13)]
    header_row: u32,

    /// First row to scan for codes (1-based)
    #[arg(long, default_value_t = 14)]
    data_start_row: u32,

    /// Row height for data rows in points (10-200)
    #[arg(long, default_value_t = 40.0)]
    row_height: f64,

    /// Width of the destination column in character units (5-100)
    #[arg(long, default_value_t = 25.0)]
    column_width: f64,
}

fn run(args: &Args) -> barcodesheet::Result<()> {
    let config = LayoutConfig {
        source_column: args.source_column.clone(),
        destination_column: args.destination_column.clone(),
        header_row: args.header_row,
        data_start_row: args.data_start_row,
        row_height: args.row_height,
        column_width: args.column_width,
    };

    let mut reader = SheetReader::open(&args.input)?;
    let sheet = reader.first_sheet()?;
    let output = transcode(&sheet, &config)?;

    std::fs::write(&args.output, &output.bytes)?;

    let report = &output.report;
    println!(
        "{}: {} barcodes rendered, {} rows skipped, {} rows failed",
        args.output.display(),
        report.rendered(),
        report.skipped(),
        report.failed()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
