use std::fmt::{Display, Error, Formatter};

use super::error::{EANError, EANResult};

// Symbol format
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum SymbolFormat {
    EAN13,
    UPCA,
    EAN8,
}

impl SymbolFormat {
    /// Classifies a digit count. Character validation happens in [`resolve_format`].
    ///
    /// [`resolve_format`]: crate::resolve_format
    pub const fn from_len(len: usize) -> EANResult<Self> {
        match len {
            13 => Ok(Self::EAN13),
            12 => Ok(Self::UPCA),
            8 => Ok(Self::EAN8),
            _ => Err(EANError::UnsupportedLength(len)),
        }
    }

    pub const fn digit_count(self) -> usize {
        match self {
            Self::EAN13 => 13,
            Self::UPCA => 12,
            Self::EAN8 => 8,
        }
    }

    // Payload digits preceding the check digit
    pub const fn payload_count(self) -> usize {
        self.digit_count() - 1
    }

    pub const fn has_leading_digit(self) -> bool {
        matches!(self, Self::EAN13)
    }

    // Digits in the left group, after the leading digit if any
    pub const fn left_count(self) -> usize {
        match self {
            Self::EAN13 | Self::UPCA => 6,
            Self::EAN8 => 4,
        }
    }

    // Digits in the right group, check digit included
    pub const fn right_count(self) -> usize {
        let leading = if self.has_leading_digit() { 1 } else { 0 };
        self.digit_count() - leading - self.left_count()
    }

    /// Width in units of the bar area on either side of the middle guard.
    pub const fn half_width(self) -> usize {
        self.left_count() * DIGIT_WIDTH
    }

    /// Total width of the symbol in units, guards included.
    pub const fn width(self) -> usize {
        SIDE_GUARD_WIDTH
            + self.left_count() * DIGIT_WIDTH
            + MIDDLE_GUARD_WIDTH
            + self.right_count() * DIGIT_WIDTH
            + SIDE_GUARD_WIDTH
    }

    /// Offset in units of the first bit of the middle guard.
    pub const fn middle_guard_offset(self) -> usize {
        SIDE_GUARD_WIDTH + self.half_width()
    }
}

impl Display for SymbolFormat {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let name = match *self {
            Self::EAN13 => "EAN-13",
            Self::UPCA => "UPC-A",
            Self::EAN8 => "EAN-8",
        };
        f.write_str(name)
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const DIGIT_WIDTH: usize = 7;

pub const SIDE_GUARD: [bool; 3] = [true, false, true];
pub const SIDE_GUARD_WIDTH: usize = SIDE_GUARD.len();

pub const MIDDLE_GUARD: [bool; 5] = [false, true, false, true, false];
pub const MIDDLE_GUARD_WIDTH: usize = MIDDLE_GUARD.len();

pub const MAX_DIGITS: usize = 13;
pub const MAX_SYMBOL_WIDTH: usize = 95;
