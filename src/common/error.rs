use std::fmt::{Display, Error, Formatter};

use super::digits::DigitString;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum EANError {
    // Input
    InvalidCharacters,
    UnsupportedLength(usize),
    ChecksumMismatch { expected: u8, corrected: DigitString },

    // Assembler
    FormatMismatch,

    // Raster
    InvalidUnitWidth,
    InvalidBarHeight,
    RasterTooLarge,
}

impl EANError {
    /// Candidate with the check digit replaced, offered on a checksum mismatch. Never applied
    /// by the library itself.
    pub fn corrected(&self) -> Option<DigitString> {
        match *self {
            Self::ChecksumMismatch { corrected, .. } => Some(corrected),
            _ => None,
        }
    }
}

impl Display for EANError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            // Input
            Self::InvalidCharacters => f.write_str("Invalid characters, only digits 0-9 allowed"),
            Self::UnsupportedLength(len) => {
                write!(f, "Unsupported length {len}, expected 8, 12 or 13 digits")
            }
            Self::ChecksumMismatch { expected, corrected } => {
                write!(f, "Checksum mismatch, expected check digit {expected}: did you mean {corrected}?")
            }

            // Assembler
            Self::FormatMismatch => f.write_str("Digit groups don't match symbol format"),

            // Raster
            Self::InvalidUnitWidth => f.write_str("Unit width must be positive"),
            Self::InvalidBarHeight => f.write_str("Bar height must be positive"),
            Self::RasterTooLarge => f.write_str("Raster dimensions exceed the supported size"),
        }
    }
}

impl std::error::Error for EANError {}

pub type EANResult<T> = Result<T, EANError>;
