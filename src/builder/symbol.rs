use tracing::trace;

use crate::common::{
    bit_utils::SymbolBits,
    codec::{encode_digit, parity_sequence, EncodingSet},
    digits::DigitString,
    error::{EANError, EANResult},
    metadata::{SymbolFormat, MIDDLE_GUARD, MIDDLE_GUARD_WIDTH, SIDE_GUARD, SIDE_GUARD_WIDTH},
};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Symbol {
    digits: DigitString,
    fmt: SymbolFormat,
    bits: SymbolBits,
}

impl Symbol {
    pub fn digits(&self) -> &DigitString {
        &self.digits
    }

    pub fn format(&self) -> SymbolFormat {
        self.fmt
    }

    pub fn bits(&self) -> &SymbolBits {
        &self.bits
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Only EAN-13 carries a leading digit, encoded in the parity of the left group.
    pub fn leading_digit(&self) -> Option<u8> {
        self.fmt.has_leading_digit().then(|| self.digits[0])
    }

    pub fn left_group(&self) -> &[u8] {
        let start = self.leading_len();
        &self.digits[start..start + self.fmt.left_count()]
    }

    pub fn right_group(&self) -> &[u8] {
        &self.digits[self.leading_len() + self.fmt.left_count()..]
    }

    pub fn middle_guard_offset(&self) -> usize {
        self.fmt.middle_guard_offset()
    }

    pub fn is_guard(&self, i: usize) -> bool {
        let mid = self.middle_guard_offset();
        i < SIDE_GUARD_WIDTH
            || i >= self.width() - SIDE_GUARD_WIDTH
            || (mid..mid + MIDDLE_GUARD_WIDTH).contains(&i)
    }

    fn leading_len(&self) -> usize {
        self.fmt.has_leading_digit() as usize
    }
}

// Assembler
//------------------------------------------------------------------------------

pub fn assemble(digits: &DigitString, fmt: SymbolFormat) -> EANResult<Symbol> {
    let (leading, left, right) = split_groups(digits, fmt)?;
    trace!(fmt = %fmt, leading, ?left, ?right, "Assembling symbol");

    let mut bits = SymbolBits::new();
    bits.extend(&SIDE_GUARD);
    encode_left_into(&mut bits, leading, left);
    bits.extend(&MIDDLE_GUARD);
    encode_right_into(&mut bits, right);
    bits.extend(&SIDE_GUARD);

    debug_assert!(bits.len() == fmt.width(), "Symbol width {} for {fmt}", bits.len());

    Ok(Symbol { digits: *digits, fmt, bits })
}

// Splits into leading digit, left group & right group. Leading digit is 0 for formats
// without one. Check digit is the last digit of the right group.
fn split_groups(digits: &DigitString, fmt: SymbolFormat) -> EANResult<(u8, &[u8], &[u8])> {
    let (leading, rest) = if fmt.has_leading_digit() {
        digits.split_first().map(|(&d, rest)| (d, rest)).ok_or(EANError::FormatMismatch)?
    } else {
        (0, &digits[..])
    };

    if rest.len() < fmt.left_count() {
        return Err(EANError::FormatMismatch);
    }
    let (left, right) = rest.split_at(fmt.left_count());

    if right.len() != fmt.right_count() {
        return Err(EANError::FormatMismatch);
    }
    Ok((leading, left, right))
}

pub fn encode_left_side(leading_digit: u8, digits: &[u8]) -> SymbolBits {
    let mut bits = SymbolBits::new();
    encode_left_into(&mut bits, leading_digit, digits);
    bits
}

pub fn encode_right_side(digits: &[u8]) -> SymbolBits {
    let mut bits = SymbolBits::new();
    encode_right_into(&mut bits, digits);
    bits
}

fn encode_left_into(bits: &mut SymbolBits, leading_digit: u8, digits: &[u8]) {
    debug_assert!(digits.len() <= 6, "Left group too long: {}", digits.len());

    let parity = parity_sequence(leading_digit);
    for (&d, &p) in digits.iter().zip(parity.iter()) {
        bits.extend(&encode_digit(d, EncodingSet::Left(p)));
    }
}

fn encode_right_into(bits: &mut SymbolBits, digits: &[u8]) {
    for &d in digits {
        bits.extend(&encode_digit(d, EncodingSet::Right));
    }
}
