//! Layout resolution: column letters, row numbers and cosmetic dimensions
//!
//! User-facing configuration speaks Excel conventions (column letters,
//! 1-based row numbers); the transcoder works with 0-based indices. This
//! module converts between the two and validates the combination up front so
//! a misconfigured layout is rejected instead of silently producing a
//! corrupted workbook.

use crate::error::{Result, SheetError};

/// Excel worksheet maximum column count.
const EXCEL_MAX_COLS: u32 = 16_384;

/// Convert a column label to a zero-based column index (A=0, Z=25, AA=26)
///
/// Lowercase letters are accepted and treated as their uppercase form. Any
/// other character fails with [`SheetError::InvalidColumn`].
pub fn column_index(label: &str) -> Result<u16> {
    let label = label.trim();
    if label.is_empty() {
        return Err(SheetError::InvalidColumn(label.to_string()));
    }

    let mut index: u32 = 0;
    for ch in label.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return Err(SheetError::InvalidColumn(label.to_string()));
        }
        index = index * 26 + (ch as u32 - 'A' as u32 + 1);
        if index > EXCEL_MAX_COLS {
            return Err(SheetError::InvalidColumn(label.to_string()));
        }
    }

    Ok((index - 1) as u16)
}

/// Convert a zero-based column index to an Excel letter (0 -> A, 25 -> Z, 26 -> AA)
pub fn column_letter(col: u16) -> String {
    let mut result = String::new();
    let mut col = col as u32 + 1;

    while col > 0 {
        col -= 1;
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }

    result
}

/// User-facing layout configuration for one conversion
///
/// Row numbers are 1-based as displayed in spreadsheet applications. Each
/// request carries its own configuration value; nothing is retained between
/// conversions.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Column holding the EAN code
    pub source_column: String,
    /// Column to receive barcode images
    pub destination_column: String,
    /// Row to receive the "Barcode" label (1-based)
    pub header_row: u32,
    /// First row to scan for codes (1-based)
    pub data_start_row: u32,
    /// Output row height for data rows, point units (10-200)
    pub row_height: f64,
    /// Output column width for the destination column, character units (5-100)
    pub column_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            source_column: "B".to_string(),
            destination_column: "G".to_string(),
            header_row: 13,
            data_start_row: 14,
            row_height: 40.0,
            column_width: 25.0,
        }
    }
}

/// Resolved, validated layout with 0-based indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Column holding the EAN code (0-based)
    pub source_col: u16,
    /// Column receiving barcode images (0-based)
    pub dest_col: u16,
    /// Row receiving the header label (0-based)
    pub header_row: u32,
    /// First row scanned for codes (0-based)
    pub data_start_row: u32,
    /// Row height for data rows, points
    pub row_height: f64,
    /// Destination column width, character units
    pub column_width: f64,
}

impl LayoutConfig {
    /// Resolve column letters and 1-based rows into a validated [`Layout`]
    pub fn resolve(&self) -> Result<Layout> {
        let source_col = column_index(&self.source_column)?;
        let dest_col = column_index(&self.destination_column)?;

        if source_col == dest_col {
            return Err(SheetError::InvalidLayout(format!(
                "source and destination columns both resolve to '{}'",
                column_letter(source_col)
            )));
        }
        if self.header_row == 0 {
            return Err(SheetError::InvalidLayout(
                "header row must be >= 1 (rows are 1-based)".to_string(),
            ));
        }
        if self.data_start_row <= self.header_row {
            return Err(SheetError::InvalidLayout(format!(
                "data start row {} must be after header row {}",
                self.data_start_row, self.header_row
            )));
        }
        if !(10.0..=200.0).contains(&self.row_height) {
            return Err(SheetError::InvalidLayout(format!(
                "row height {} is outside the allowed range 10-200",
                self.row_height
            )));
        }
        if !(5.0..=100.0).contains(&self.column_width) {
            return Err(SheetError::InvalidLayout(format!(
                "column width {} is outside the allowed range 5-100",
                self.column_width
            )));
        }

        Ok(Layout {
            source_col,
            dest_col,
            header_row: self.header_row - 1,
            data_start_row: self.data_start_row - 1,
            row_height: self.row_height,
            column_width: self.column_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_single_letters() {
        assert_eq!(column_index("A").unwrap(), 0);
        assert_eq!(column_index("B").unwrap(), 1);
        assert_eq!(column_index("G").unwrap(), 6);
        assert_eq!(column_index("Z").unwrap(), 25);
    }

    #[test]
    fn test_column_index_multi_letters() {
        assert_eq!(column_index("AA").unwrap(), 26);
        assert_eq!(column_index("AZ").unwrap(), 51);
        assert_eq!(column_index("BA").unwrap(), 52);
    }

    #[test]
    fn test_column_index_monotonic() {
        // strictly increasing under base-26 lexicographic ordering
        let labels = ["A", "B", "Z", "AA", "AB", "AZ", "BA", "ZZ", "AAA"];
        let indices: Vec<u16> = labels
            .iter()
            .map(|l| column_index(l).unwrap())
            .collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_column_index_rejects_non_letters() {
        assert!(matches!(
            column_index("A1"),
            Err(SheetError::InvalidColumn(_))
        ));
        assert!(matches!(
            column_index(""),
            Err(SheetError::InvalidColumn(_))
        ));
        assert!(matches!(
            column_index("Ä"),
            Err(SheetError::InvalidColumn(_))
        ));
    }

    #[test]
    fn test_column_letter_roundtrip() {
        for col in [0u16, 1, 25, 26, 51, 52, 701, 702] {
            assert_eq!(column_index(&column_letter(col)).unwrap(), col);
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let layout = LayoutConfig::default().resolve().unwrap();
        assert_eq!(layout.source_col, 1);
        assert_eq!(layout.dest_col, 6);
        // 1-based row 13 becomes 0-based index 12
        assert_eq!(layout.header_row, 12);
        assert_eq!(layout.data_start_row, 13);
    }

    #[test]
    fn test_resolve_rejects_overlapping_columns() {
        let config = LayoutConfig {
            destination_column: "B".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(SheetError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_data_before_header() {
        let config = LayoutConfig {
            header_row: 14,
            data_start_row: 14,
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(SheetError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_out_of_range_dimensions() {
        let config = LayoutConfig {
            row_height: 500.0,
            ..Default::default()
        };
        assert!(config.resolve().is_err());

        let config = LayoutConfig {
            column_width: 1.0,
            ..Default::default()
        };
        assert!(config.resolve().is_err());
    }
}
