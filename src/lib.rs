//! # barcodesheet
//!
//! Turns a price-list spreadsheet with EAN product codes into a new
//! spreadsheet where each code is rendered as a scannable barcode image.
//!
//! ## Features
//!
//! - **Single pass**: read workbook, copy cells, render images, write workbook
//! - **Length dispatch**: 13 digits -> EAN-13, 8 digits -> EAN-8, everything
//!   else -> Code 128 fallback
//! - **Tolerant input**: numeric cells, `".0"` coercion artifacts and stray
//!   separators are normalized to digit strings
//! - **Row-local failures**: a row that cannot be rendered is logged and
//!   skipped, the conversion continues
//! - **Inspectable outcomes**: every scanned row reports
//!   Skipped / Rendered / Failed
//! - **No temp files**: barcode images live only in memory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use barcodesheet::layout::LayoutConfig;
//! use barcodesheet::reader::SheetReader;
//! use barcodesheet::transcoder::transcode;
//!
//! # fn main() -> barcodesheet::error::Result<()> {
//! let mut reader = SheetReader::open("preisliste.xlsx")?;
//! let sheet = reader.first_sheet()?;
//!
//! // header on row 13, EAN codes in column B, barcodes into column G
//! let output = transcode(&sheet, &LayoutConfig::default())?;
//!
//! std::fs::write("preisliste_mit_barcodes.xlsx", &output.bytes)?;
//! # Ok(())
//! # }
//! ```

pub mod barcode;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod reader;
pub mod transcoder;
pub mod types;

pub use barcode::Symbology;
pub use error::{Result, SheetError};
pub use layout::{Layout, LayoutConfig};
pub use reader::SheetReader;
pub use transcoder::{transcode, RowOutcome, TranscodeOutput, TranscodeReport};
pub use types::{CellValue, Sheet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_imports() {
        // Test that all public types are accessible
        let _ = std::marker::PhantomData::<SheetError>;
        let _ = std::marker::PhantomData::<LayoutConfig>;
        let _ = std::marker::PhantomData::<TranscodeReport>;
    }
}
