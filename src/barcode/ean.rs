//! EAN-13 and EAN-8 module sequence encoders
//!
//! An EAN-13 symbol is 95 modules: start guard (101), six digits from the
//! left half encoded with an L/G parity pattern selected by the leading
//! digit, center guard (01010), six R-coded digits, end guard (101). EAN-8
//! is the 67-module variant with four digits per half and no parity trick.
//!
//! Check digits are not validated; a 13- or 8-digit string renders as-is.

use super::{RenderError, Symbology};

/// L-codes for digits 0-9. R = complement, G = reversed R.
const L_CODES: [[u8; 7]; 10] = [
    [0, 0, 0, 1, 1, 0, 1],
    [0, 0, 1, 1, 0, 0, 1],
    [0, 0, 1, 0, 0, 1, 1],
    [0, 1, 1, 1, 1, 0, 1],
    [0, 1, 0, 0, 0, 1, 1],
    [0, 1, 1, 0, 0, 0, 1],
    [0, 1, 0, 1, 1, 1, 1],
    [0, 1, 1, 1, 0, 1, 1],
    [0, 1, 1, 0, 1, 1, 1],
    [0, 0, 0, 1, 0, 1, 1],
];

/// L/G parity of the left-half digits, selected by the leading digit
/// (0 = L-code, 1 = G-code).
const PARITY: [[u8; 6]; 10] = [
    [0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 1, 1],
    [0, 0, 1, 1, 0, 1],
    [0, 0, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 1],
    [0, 1, 1, 0, 0, 1],
    [0, 1, 1, 1, 0, 0],
    [0, 1, 0, 1, 0, 1],
    [0, 1, 0, 1, 1, 0],
    [0, 1, 1, 0, 1, 0],
];

const SIDE_GUARD: [u8; 3] = [1, 0, 1];
const CENTER_GUARD: [u8; 5] = [0, 1, 0, 1, 0];

fn digits_of(code: &str, symbology: Symbology, expected: usize) -> Result<Vec<u8>, RenderError> {
    if code.len() != expected {
        return Err(RenderError::WrongLength {
            symbology,
            expected,
            actual: code.len(),
        });
    }
    code.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(RenderError::UnencodableCharacter(c))
        })
        .collect()
}

fn push_l(modules: &mut Vec<u8>, digit: u8) {
    modules.extend_from_slice(&L_CODES[digit as usize]);
}

fn push_g(modules: &mut Vec<u8>, digit: u8) {
    // G-code is the R-code read backwards
    modules.extend(L_CODES[digit as usize].iter().rev().map(|m| 1 - m));
}

fn push_r(modules: &mut Vec<u8>, digit: u8) {
    modules.extend(L_CODES[digit as usize].iter().map(|m| 1 - m));
}

/// Encode a 13-digit string as a 95-module EAN-13 sequence
pub fn encode_ean13(code: &str) -> Result<Vec<u8>, RenderError> {
    let digits = digits_of(code, Symbology::Ean13, 13)?;
    let parity = &PARITY[digits[0] as usize];

    let mut modules = Vec::with_capacity(95);
    modules.extend_from_slice(&SIDE_GUARD);
    for (i, &digit) in digits[1..7].iter().enumerate() {
        if parity[i] == 0 {
            push_l(&mut modules, digit);
        } else {
            push_g(&mut modules, digit);
        }
    }
    modules.extend_from_slice(&CENTER_GUARD);
    for &digit in &digits[7..13] {
        push_r(&mut modules, digit);
    }
    modules.extend_from_slice(&SIDE_GUARD);

    Ok(modules)
}

/// Encode an 8-digit string as a 67-module EAN-8 sequence
pub fn encode_ean8(code: &str) -> Result<Vec<u8>, RenderError> {
    let digits = digits_of(code, Symbology::Ean8, 8)?;

    let mut modules = Vec::with_capacity(67);
    modules.extend_from_slice(&SIDE_GUARD);
    for &digit in &digits[0..4] {
        push_l(&mut modules, digit);
    }
    modules.extend_from_slice(&CENTER_GUARD);
    for &digit in &digits[4..8] {
        push_r(&mut modules, digit);
    }
    modules.extend_from_slice(&SIDE_GUARD);

    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_structure() {
        let modules = encode_ean13("4006381333931").unwrap();
        assert_eq!(modules.len(), 95);
        assert_eq!(&modules[0..3], &SIDE_GUARD);
        assert_eq!(&modules[45..50], &CENTER_GUARD);
        assert_eq!(&modules[92..95], &SIDE_GUARD);
    }

    #[test]
    fn test_ean13_left_half_parity() {
        // leading digit 0 means all left digits use plain L-codes
        let modules = encode_ean13("0123456789012").unwrap();
        assert_eq!(&modules[3..10], &L_CODES[1]);
        assert_eq!(&modules[10..17], &L_CODES[2]);
    }

    #[test]
    fn test_ean13_right_half_is_complemented() {
        let modules = encode_ean13("0000000000000").unwrap();
        let r0: Vec<u8> = L_CODES[0].iter().map(|m| 1 - m).collect();
        assert_eq!(&modules[50..57], r0.as_slice());
    }

    #[test]
    fn test_ean8_structure() {
        let modules = encode_ean8("96385074").unwrap();
        assert_eq!(modules.len(), 67);
        assert_eq!(&modules[0..3], &SIDE_GUARD);
        assert_eq!(&modules[31..36], &CENTER_GUARD);
        assert_eq!(&modules[64..67], &SIDE_GUARD);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(encode_ean13("123").is_err());
        assert!(encode_ean8("123456789").is_err());
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(
            encode_ean13("40063813339X1"),
            Err(RenderError::UnencodableCharacter('X'))
        ));
    }
}
