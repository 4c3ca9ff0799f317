use super::bit_utils::get_bits;
use super::metadata::DIGIT_WIDTH;

// Encoding set
//------------------------------------------------------------------------------

/// Table selector for one digit. `Left(0)` is odd parity (set A), `Left(1)` even parity
/// (set B), `Right` the right-hand set C.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum EncodingSet {
    Left(u8),
    Right,
}

// Digit encoder
//------------------------------------------------------------------------------

pub type BarPattern = [bool; DIGIT_WIDTH];

pub fn encode_digit(digit: u8, set: EncodingSet) -> BarPattern {
    debug_assert!(digit < 10, "Invalid digit: {digit}");

    let value = match set {
        EncodingSet::Left(parity) => {
            debug_assert!(parity < 2, "Invalid parity: {parity}");
            LEFT_ENCODING[parity as usize][digit as usize]
        }
        EncodingSet::Right => RIGHT_ENCODING[digit as usize],
    };
    get_bits(value)
}

/// Parity of each left group digit for a leading digit. UPC-A and EAN-8 use leading digit 0,
/// which maps to all odd parity.
pub fn parity_sequence(leading_digit: u8) -> [u8; 6] {
    debug_assert!(leading_digit < 10, "Invalid leading digit: {leading_digit}");

    get_bits::<u8, 6>(PARITY_ENCODING[leading_digit as usize]).map(|b| b as u8)
}


// Global constants
//------------------------------------------------------------------------------

// Left hand values indexed by parity then digit: odd parity (set A), even parity (set B)
static LEFT_ENCODING: [[u8; 10]; 2] =
    [[13, 25, 19, 61, 35, 49, 47, 59, 55, 11], [39, 51, 27, 33, 29, 57, 5, 17, 9, 23]];

// Right hand values (set C), shared by all formats
static RIGHT_ENCODING: [u8; 10] = [114, 102, 108, 66, 92, 78, 80, 68, 72, 116];

// Parity of the six left digits per EAN-13 leading digit, first digit in the high bit
static PARITY_ENCODING: [u8; 10] = [0, 11, 13, 14, 19, 25, 28, 21, 22, 26];
