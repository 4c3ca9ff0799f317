use std::fmt::{Display, Error, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use super::error::{EANError, EANResult};
use super::metadata::{SymbolFormat, MAX_DIGITS};

// Format resolver
//------------------------------------------------------------------------------

/// Validates that `input` holds only ASCII digits and classifies it by length.
pub fn resolve_format(input: &str) -> EANResult<SymbolFormat> {
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EANError::InvalidCharacters);
    }
    SymbolFormat::from_len(input.len())
}


// Digit string
//------------------------------------------------------------------------------

/// Validated digits of one symbol, check digit last.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct DigitString {
    digits: [u8; MAX_DIGITS],
    fmt: SymbolFormat,
}

impl DigitString {
    pub fn parse(input: &str) -> EANResult<Self> {
        let fmt = resolve_format(input)?;
        let mut digits = [0; MAX_DIGITS];
        for (d, b) in digits.iter_mut().zip(input.bytes()) {
            *d = b - b'0';
        }
        Ok(Self { digits, fmt })
    }

    pub fn format(&self) -> SymbolFormat {
        self.fmt
    }

    pub fn len(&self) -> usize {
        self.fmt.digit_count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn check_digit(&self) -> u8 {
        self.digits[self.len() - 1]
    }

    pub fn payload(&self) -> &[u8] {
        &self.digits[..self.fmt.payload_count()]
    }

    /// Copy with the final digit replaced.
    pub fn with_check_digit(mut self, check_digit: u8) -> Self {
        debug_assert!(check_digit < 10, "Check digit must be a single digit: {check_digit}");

        let last = self.len() - 1;
        self.digits[last] = check_digit;
        self
    }
}

impl Deref for DigitString {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.digits[..self.len()]
    }
}

impl FromStr for DigitString {
    type Err = EANError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for DigitString {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        self.iter().try_for_each(|d| write!(f, "{d}"))
    }
}
