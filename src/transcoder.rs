//! The sheet transcoder: one forward pass from input grid to output workbook
//!
//! Copies every original cell value into a new workbook, then walks the data
//! rows once, turning each normalized code into a barcode image in the
//! destination column. Row failures are recorded and logged, never raised;
//! only layout and I/O problems abort the conversion.

use rust_xlsxwriter::{Image, Workbook};

use crate::barcode::{self, Symbology};
use crate::error::Result;
use crate::layout::LayoutConfig;
use crate::normalize::normalize_code;
use crate::types::{CellValue, Sheet};

/// Label written at the header row of the destination column.
const HEADER_LABEL: &str = "Barcode";

/// Visual scale applied to inserted images so they fit typical row heights.
const IMAGE_SCALE: f64 = 0.7;

/// Outcome of one scanned data row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Source cell was absent or contained no digits; nothing written
    Skipped,
    /// Barcode image inserted with the given symbology
    Rendered(Symbology),
    /// Rendering failed; the row's other cells are still present
    Failed { reason: String },
}

/// Per-conversion report of row outcomes
///
/// Outcomes are recorded in row order for every row from the data start row
/// to the last row of the sheet.
#[derive(Debug, Clone, Default)]
pub struct TranscodeReport {
    /// (0-based row index, outcome) for each scanned data row
    pub outcomes: Vec<(u32, RowOutcome)>,
}

impl TranscodeReport {
    /// Number of rows that received a barcode image
    pub fn rendered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RowOutcome::Rendered(_)))
            .count()
    }

    /// Number of rows skipped for lack of a code
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RowOutcome::Skipped))
            .count()
    }

    /// Number of rows whose code could not be rendered
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RowOutcome::Failed { .. }))
            .count()
    }

    /// Outcome for a specific 0-based row index, if the row was scanned
    pub fn outcome(&self, row: u32) -> Option<&RowOutcome> {
        self.outcomes
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, o)| o)
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct TranscodeOutput {
    /// Serialized XLSX workbook
    pub bytes: Vec<u8>,
    /// Per-row outcomes
    pub report: TranscodeReport,
}

/// Convert a materialized sheet into an XLSX workbook with barcode images
///
/// All original cell values are copied verbatim (empty cells stay absent), a
/// header label is written at the configured header row, and every data row
/// with a normalizable code gets a barcode image in the destination column.
///
/// # Examples
///
/// ```no_run
/// use barcodesheet::layout::LayoutConfig;
/// use barcodesheet::reader::SheetReader;
/// use barcodesheet::transcoder::transcode;
///
/// # fn main() -> barcodesheet::error::Result<()> {
/// let mut reader = SheetReader::open("preisliste.xlsx")?;
/// let sheet = reader.first_sheet()?;
/// let output = transcode(&sheet, &LayoutConfig::default())?;
/// std::fs::write("preisliste_mit_barcodes.xlsx", &output.bytes)?;
/// println!("{} barcodes rendered", output.report.rendered());
/// # Ok(())
/// # }
/// ```
pub fn transcode(sheet: &Sheet, config: &LayoutConfig) -> Result<TranscodeOutput> {
    let layout = config.resolve()?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if !sheet.name.is_empty() {
        worksheet.set_name(&sheet.name)?;
    }

    // copy all original values before the barcode pass
    for (r, row) in sheet.rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match value {
                CellValue::Empty => {}
                CellValue::String(s) => {
                    worksheet.write_string(r, c, s)?;
                }
                CellValue::Int(i) => {
                    worksheet.write_number(r, c, *i as f64)?;
                }
                CellValue::Float(f) => {
                    worksheet.write_number(r, c, *f)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
            }
        }
    }

    worksheet.write_string(layout.header_row, layout.dest_col, HEADER_LABEL)?;
    worksheet.set_column_width(layout.dest_col, layout.column_width)?;

    let mut report = TranscodeReport::default();
    let row_count = sheet.row_count() as u32;

    for r in layout.data_start_row..row_count {
        worksheet.set_row_height(r, layout.row_height)?;

        let value = sheet.cell(r as usize, layout.source_col as usize);
        let Some(code) = normalize_code(value) else {
            report.outcomes.push((r, RowOutcome::Skipped));
            continue;
        };

        let symbology = Symbology::select(&code);
        let outcome = match barcode::render_png(&code, symbology) {
            Ok(png) => {
                let image = Image::new_from_buffer(&png)?
                    .set_scale_width(IMAGE_SCALE)
                    .set_scale_height(IMAGE_SCALE);
                worksheet.insert_image(r, layout.dest_col, &image)?;
                RowOutcome::Rendered(symbology)
            }
            Err(err) => {
                log::warn!(
                    "row {}: cannot render {} barcode for '{}': {}",
                    r + 1,
                    symbology,
                    code,
                    err
                );
                RowOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
        report.outcomes.push((r, outcome));
    }

    let bytes = workbook.save_to_buffer()?;

    Ok(TranscodeOutput { bytes, report })
}
