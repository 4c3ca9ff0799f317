use super::digits::DigitString;
use super::error::{EANError, EANResult};

// Check digit
//------------------------------------------------------------------------------

/// Mod-10 check digit over `payload`: walking from the rightmost digit, weights alternate
/// 3, 1, 3, ...
pub fn compute_check_digit(payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i & 1 == 0 { d as u32 * 3 } else { d as u32 })
        .sum::<u32>();
    ((10 - sum % 10) % 10) as u8
}

pub fn checksum_matches(digits: &DigitString) -> bool {
    digits.check_digit() == compute_check_digit(digits.payload())
}

/// Replaces the check digit with the computed one. Only repairs the check digit itself,
/// substitutions or transpositions in the payload go unnoticed.
pub fn correct_checksum(digits: &DigitString) -> DigitString {
    digits.with_check_digit(compute_check_digit(digits.payload()))
}

/// Fails with [`EANError::ChecksumMismatch`] carrying the corrected candidate.
pub fn verify_checksum(digits: &DigitString) -> EANResult<()> {
    let expected = compute_check_digit(digits.payload());
    if digits.check_digit() != expected {
        let corrected = digits.with_check_digit(expected);
        return Err(EANError::ChecksumMismatch { expected, corrected });
    }
    Ok(())
}
