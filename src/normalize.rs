//! Code normalization: raw cell values into digit-only code strings
//!
//! Spreadsheets routinely store EAN codes as numbers, which round-trips
//! through text as `"4006381333931.0"`. Normalization undoes that coercion
//! and strips everything that is not a decimal digit.

use crate::types::CellValue;

/// Normalize a raw cell value into a digit-only code string
///
/// Returns `None` when the row should be skipped: the cell is absent, or no
/// digits remain after cleaning. Idempotent on already-normalized strings.
pub fn normalize_code(value: &CellValue) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let text = value.as_string();
    let trimmed = text.trim();

    // numeric-to-text coercion artifact
    let stripped = trimmed.strip_suffix(".0").unwrap_or(trimmed);

    let digits: String = stripped.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    Some(digits)
}
