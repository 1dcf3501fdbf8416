//! Code 128 module sequence encoder
//!
//! Used as the fallback symbology for codes that are not 8 or 13 digits
//! long. Even-length digit strings are encoded compactly with code set C
//! (two digits per symbol); everything else uses code set B, which covers
//! the printable ASCII range.

use super::RenderError;

/// Element widths (bar, space, bar, space, bar, space) for symbol values
/// 0-105 per the Code 128 standard. The stop pattern has seven elements and
/// is kept separately.
const WIDTHS: [[u8; 6]; 106] = [
    [2, 1, 2, 2, 2, 2],
    [2, 2, 2, 1, 2, 2],
    [2, 2, 2, 2, 2, 1],
    [1, 2, 1, 2, 2, 3],
    [1, 2, 1, 3, 2, 2],
    [1, 3, 1, 2, 2, 2],
    [1, 2, 2, 2, 1, 3],
    [1, 2, 2, 3, 1, 2],
    [1, 3, 2, 2, 1, 2],
    [2, 2, 1, 2, 1, 3],
    [2, 2, 1, 3, 1, 2],
    [2, 3, 1, 2, 1, 2],
    [1, 1, 2, 2, 3, 2],
    [1, 2, 2, 1, 3, 2],
    [1, 2, 2, 2, 3, 1],
    [1, 1, 3, 2, 2, 2],
    [1, 2, 3, 1, 2, 2],
    [1, 2, 3, 2, 2, 1],
    [2, 2, 3, 2, 1, 1],
    [2, 2, 1, 1, 3, 2],
    [2, 2, 1, 2, 3, 1],
    [2, 1, 3, 2, 1, 2],
    [2, 2, 3, 1, 1, 2],
    [3, 1, 2, 1, 3, 1],
    [3, 1, 1, 2, 2, 2],
    [3, 2, 1, 1, 2, 2],
    [3, 2, 1, 2, 2, 1],
    [3, 1, 2, 2, 1, 2],
    [3, 2, 2, 1, 1, 2],
    [3, 2, 2, 2, 1, 1],
    [2, 1, 2, 1, 2, 3],
    [2, 1, 2, 3, 2, 1],
    [2, 3, 2, 1, 2, 1],
    [1, 1, 1, 3, 2, 3],
    [1, 3, 1, 1, 2, 3],
    [1, 3, 1, 3, 2, 1],
    [1, 1, 2, 3, 1, 3],
    [1, 3, 2, 1, 1, 3],
    [1, 3, 2, 3, 1, 1],
    [2, 1, 1, 3, 1, 3],
    [2, 3, 1, 1, 1, 3],
    [2, 3, 1, 3, 1, 1],
    [1, 1, 2, 1, 3, 3],
    [1, 1, 2, 3, 3, 1],
    [1, 3, 2, 1, 3, 1],
    [1, 1, 3, 1, 2, 3],
    [1, 1, 3, 3, 2, 1],
    [1, 3, 3, 1, 2, 1],
    [3, 1, 3, 1, 2, 1],
    [2, 1, 1, 3, 3, 1],
    [2, 3, 1, 1, 3, 1],
    [2, 1, 3, 1, 1, 3],
    [2, 1, 3, 3, 1, 1],
    [2, 1, 3, 1, 3, 1],
    [3, 1, 1, 1, 2, 3],
    [3, 1, 1, 3, 2, 1],
    [3, 3, 1, 1, 2, 1],
    [3, 1, 2, 1, 1, 3],
    [3, 1, 2, 3, 1, 1],
    [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1],
    [2, 2, 1, 4, 1, 1],
    [4, 3, 1, 1, 1, 1],
    [1, 1, 1, 2, 2, 4],
    [1, 1, 1, 4, 2, 2],
    [1, 2, 1, 1, 2, 4],
    [1, 2, 1, 4, 2, 1],
    [1, 4, 1, 1, 2, 2],
    [1, 4, 1, 2, 2, 1],
    [1, 1, 2, 2, 1, 4],
    [1, 1, 2, 4, 1, 2],
    [1, 2, 2, 1, 1, 4],
    [1, 2, 2, 4, 1, 1],
    [1, 4, 2, 1, 1, 2],
    [1, 4, 2, 2, 1, 1],
    [2, 4, 1, 2, 1, 1],
    [2, 2, 1, 1, 1, 4],
    [4, 1, 3, 1, 1, 1],
    [2, 4, 1, 1, 1, 2],
    [1, 3, 4, 1, 1, 1],
    [1, 1, 1, 2, 4, 2],
    [1, 2, 1, 1, 4, 2],
    [1, 2, 1, 2, 4, 1],
    [1, 1, 4, 2, 1, 2],
    [1, 2, 4, 1, 1, 2],
    [1, 2, 4, 2, 1, 1],
    [4, 1, 1, 2, 1, 2],
    [4, 2, 1, 1, 1, 2],
    [4, 2, 1, 2, 1, 1],
    [2, 1, 2, 1, 4, 1],
    [2, 1, 4, 1, 2, 1],
    [4, 1, 2, 1, 2, 1],
    [1, 1, 1, 1, 4, 3],
    [1, 1, 1, 3, 4, 1],
    [1, 3, 1, 1, 4, 1],
    [1, 1, 4, 1, 1, 3],
    [1, 1, 4, 3, 1, 1],
    [4, 1, 1, 1, 1, 3],
    [4, 1, 1, 3, 1, 1],
    [1, 1, 3, 1, 4, 1],
    [1, 1, 4, 1, 3, 1],
    [3, 1, 1, 1, 4, 1],
    [4, 1, 1, 1, 3, 1],
    [2, 1, 1, 4, 1, 2],
    [2, 1, 1, 2, 1, 4],
    [2, 1, 1, 2, 3, 2],
];

/// Stop pattern element widths (ends with a two-module bar).
const STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

const START_B: u8 = 104;
const START_C: u8 = 105;

/// Translate the input into symbol values, including the start code.
fn symbol_values(code: &str) -> Result<Vec<u8>, RenderError> {
    if code.is_empty() {
        return Err(RenderError::Empty);
    }

    let all_digits = code.chars().all(|c| c.is_ascii_digit());
    if all_digits && code.len() % 2 == 0 {
        // code set C: one symbol per digit pair
        let bytes = code.as_bytes();
        let mut values = vec![START_C];
        for pair in bytes.chunks(2) {
            values.push((pair[0] - b'0') * 10 + (pair[1] - b'0'));
        }
        return Ok(values);
    }

    // code set B covers printable ASCII 32..=126
    let mut values = vec![START_B];
    for ch in code.chars() {
        if !(' '..='~').contains(&ch) {
            return Err(RenderError::UnencodableCharacter(ch));
        }
        values.push(ch as u8 - 32);
    }
    Ok(values)
}

/// Encode a string as a Code 128 module sequence
pub fn encode(code: &str) -> Result<Vec<u8>, RenderError> {
    let values = symbol_values(code)?;

    // modulo-103 check symbol; the start code has weight 1 as well
    let mut checksum = values[0] as u32;
    for (i, &value) in values[1..].iter().enumerate() {
        checksum += value as u32 * (i as u32 + 1);
    }
    let check = (checksum % 103) as u8;

    let mut modules = Vec::with_capacity(11 * (values.len() + 1) + 13);
    for value in values.iter().chain(std::iter::once(&check)) {
        push_widths(&mut modules, &WIDTHS[*value as usize]);
    }
    push_widths(&mut modules, &STOP);

    Ok(modules)
}

/// Expand alternating bar/space element widths, starting with a bar.
fn push_widths(modules: &mut Vec<u8>, widths: &[u8]) {
    for (i, &width) in widths.iter().enumerate() {
        let module = if i % 2 == 0 { 1 } else { 0 };
        for _ in 0..width {
            modules.push(module);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_even_digits_uses_set_c() {
        // start + 3 pairs + check = 5 symbols of 11 modules, plus 13-module stop
        let modules = encode("123456").unwrap();
        assert_eq!(modules.len(), 5 * 11 + 13);
    }

    #[test]
    fn test_length_odd_digits_uses_set_b() {
        // start + 7 chars + check = 9 symbols
        let modules = encode("1234567").unwrap();
        assert_eq!(modules.len(), 9 * 11 + 13);
    }

    #[test]
    fn test_starts_and_ends_with_bar() {
        let modules = encode("1234567").unwrap();
        assert_eq!(modules[0], 1);
        // stop pattern ends with a two-module bar
        assert_eq!(&modules[modules.len() - 2..], &[1, 1]);
    }

    #[test]
    fn test_check_symbol_placement() {
        // start C (105) + symbol 12 gives check (105 + 12) % 103 = 14
        let modules = encode("12").unwrap();
        let check_start = 2 * 11;
        let mut expected = Vec::new();
        push_widths(&mut expected, &WIDTHS[14]);
        assert_eq!(&modules[check_start..check_start + 11], expected.as_slice());
    }

    #[test]
    fn test_empty_code_rejected() {
        assert!(matches!(encode(""), Err(RenderError::Empty)));
    }

    #[test]
    fn test_unencodable_character_rejected() {
        assert!(matches!(
            encode("abc\u{00e4}"),
            Err(RenderError::UnencodableCharacter('\u{00e4}'))
        ));
    }
}
