//! Spreadsheet reading: first sheet, fully materialized

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};

use crate::error::{Result, SheetError};
use crate::types::{CellValue, Sheet};

/// Spreadsheet file reader
///
/// Supports XLSX, XLS, and ODS formats; the format is auto-detected. Only
/// the first sheet is consumed, additional sheets are ignored.
pub struct SheetReader<RS: Read + Seek> {
    workbook: Sheets<RS>,
}

impl SheetReader<BufReader<File>> {
    /// Open a spreadsheet file for reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use barcodesheet::reader::SheetReader;
    ///
    /// let mut reader = SheetReader::open("preisliste.xlsx").unwrap();
    /// let sheet = reader.first_sheet().unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let workbook =
            open_workbook_auto(path).map_err(|e| SheetError::ReadError(e.to_string()))?;

        Ok(SheetReader { workbook })
    }
}

impl<RS: Read + Seek> SheetReader<RS> {
    /// Open a spreadsheet from an in-memory byte stream, e.g. an upload
    ///
    /// The format is detected from the stream content. Auto-detection needs
    /// `Clone` to probe the stream; file-based [`SheetReader::open`] has no
    /// such requirement.
    pub fn from_reader(rs: RS) -> Result<Self>
    where
        RS: Clone,
    {
        let workbook =
            open_workbook_auto_from_rs(rs).map_err(|e| SheetError::ReadError(e.to_string()))?;

        Ok(SheetReader { workbook })
    }

    /// Get list of sheet names in the workbook
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Materialize the first sheet into a rectangular cell grid
    ///
    /// Cells before the used range or absent inside it become
    /// [`CellValue::Empty`]. An empty workbook sheet yields a sheet with zero
    /// rows.
    pub fn first_sheet(&mut self) -> Result<Sheet> {
        let name = self
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| SheetError::ReadError("workbook contains no sheets".to_string()))?;

        let range = self
            .workbook
            .worksheet_range(&name)
            .map_err(|e| SheetError::ReadError(e.to_string()))?;

        let rows = match range.end() {
            None => Vec::new(),
            Some((max_row, max_col)) => {
                let mut rows = Vec::with_capacity(max_row as usize + 1);
                for r in 0..=max_row {
                    let mut cells = Vec::with_capacity(max_col as usize + 1);
                    for c in 0..=max_col {
                        let cell = range
                            .get_value((r, c))
                            .map(data_to_cellvalue)
                            .unwrap_or(CellValue::Empty);
                        cells.push(cell);
                    }
                    rows.push(cells);
                }
                rows
            }
        };

        Ok(Sheet::new(name, rows))
    }
}

/// Convert calamine Data to our CellValue
fn data_to_cellvalue(dt: &Data) -> CellValue {
    match dt {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(d) => CellValue::Float(d.as_f64()),
        Data::Error(e) => CellValue::String(format!("{:?}", e)),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_reader_on_in_memory_stream() {
        // uploads arrive as byte buffers, not files
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Preisliste").unwrap();
        worksheet.write_string(0, 0, "EAN").unwrap();
        worksheet.write_string(1, 0, "4006381333931").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let mut reader = SheetReader::from_reader(Cursor::new(bytes)).unwrap();
        let sheet = reader.first_sheet().unwrap();
        assert_eq!(sheet.name, "Preisliste");
        assert_eq!(
            sheet.cell(1, 0),
            &CellValue::String("4006381333931".to_string())
        );
    }

    #[test]
    fn test_data_conversion() {
        let dt = Data::String("4006381333931".to_string());
        assert_eq!(
            data_to_cellvalue(&dt),
            CellValue::String("4006381333931".to_string())
        );

        let dt = Data::Float(96385074.0);
        assert_eq!(data_to_cellvalue(&dt), CellValue::Float(96385074.0));

        assert_eq!(data_to_cellvalue(&Data::Empty), CellValue::Empty);
    }
}
