//! Barcode symbology selection and PNG rendering
//!
//! Encoders produce a module sequence (one byte per module, 1 = bar,
//! 0 = space) which the raster stage turns into an in-memory PNG. Nothing
//! here touches the filesystem, so a conversion cannot leak temporary image
//! files no matter where it fails.

mod code128;
mod ean;
mod raster;

use std::fmt;

use thiserror::Error;

/// Row-local rendering errors
///
/// These never abort a conversion; the transcoder logs them and moves on to
/// the next row.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Code has the wrong number of digits for the selected symbology
    #[error("{symbology} requires exactly {expected} digits, got {actual}")]
    WrongLength {
        symbology: Symbology,
        expected: usize,
        actual: usize,
    },

    /// Code contains a character the symbology cannot encode
    #[error("code contains a character that cannot be encoded: {0:?}")]
    UnencodableCharacter(char),

    /// Nothing to encode
    #[error("empty code")]
    Empty,

    /// PNG serialization failed
    #[error("PNG encoding failed: {0}")]
    Png(String),
}

/// Barcode symbology chosen for a code string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    /// 13-digit retail barcode
    Ean13,
    /// 8-digit retail barcode
    Ean8,
    /// General-purpose fallback for non-standard lengths
    Code128,
}

impl Symbology {
    /// Select a symbology by code length: 13 digits -> EAN-13, 8 digits ->
    /// EAN-8, anything else -> Code 128. No checksum or digit-range
    /// validation happens here.
    pub fn select(code: &str) -> Symbology {
        match code.len() {
            13 => Symbology::Ean13,
            8 => Symbology::Ean8,
            _ => Symbology::Code128,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Code128 => "Code128",
        };
        write!(f, "{}", name)
    }
}

/// Render a code string as a PNG image using the given symbology
///
/// The returned buffer is a complete PNG file, suitable for embedding into a
/// worksheet cell.
pub fn render_png(code: &str, symbology: Symbology) -> Result<Vec<u8>, RenderError> {
    let modules = match symbology {
        Symbology::Ean13 => ean::encode_ean13(code)?,
        Symbology::Ean8 => ean::encode_ean8(code)?,
        Symbology::Code128 => code128::encode(code)?,
    };
    raster::modules_to_png(&modules)
}
