//! Modulo-11 weighted checksum
//!
//! Computes the validation digit of a RUT body and maps it to its check
//! character. Digits are weighted right-to-left with the repeating cycle
//! 2,3,4,5,6,7 and summed; the digit is `11 - (sum mod 11)`.

use crate::error::RutError;

/// Weight applied to the body digit at `position`, counted from the
/// rightmost digit.
fn weight(position: usize) -> u64 {
    2 + (position % 6) as u64
}

/// Computes the validation digit of a RUT body.
///
/// The body must be the numeric part only, without the check character
/// and without any separators.
///
/// # Arguments
/// - `body` - The RUT digits, most significant first
///
/// # Returns
/// - `Ok(digit)` with the validation digit in `0..=11`; `11` corresponds
///   to the check character `0` and `10` to `k`
/// - `Err(RutError::EmptyBody)` if `body` has no characters
/// - `Err(RutError::InvalidBodyCharacter)` if `body` contains anything
///   other than ASCII digits
pub fn get_validation_digit(body: &str) -> Result<u8, RutError> {
    if body.is_empty() {
        return Err(RutError::EmptyBody);
    }

    let length = body.chars().count();
    let mut sum: u64 = 0;

    for (position, character) in body.chars().rev().enumerate() {
        let digit = character
            .to_digit(10)
            .ok_or(RutError::InvalidBodyCharacter {
                character,
                position: length - 1 - position,
            })?;
        sum += u64::from(digit) * weight(position);
    }

    Ok(11 - (sum % 11) as u8)
}

/// Maps a validation digit to its check character.
///
/// `11` maps to `'0'`, `10` maps to `'k'` and every other value maps to
/// the corresponding decimal digit character. Input must come from
/// [`get_validation_digit`].
pub fn check_char(digit: u8) -> char {
    match digit {
        11 => '0',
        10 => 'k',
        digit => char::from(b'0' + digit % 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_digit_k_body() {
        assert_eq!(get_validation_digit("9043943"), Ok(10));
    }

    #[test]
    fn test_validation_digit_six() {
        assert_eq!(get_validation_digit("14400408"), Ok(6));
    }

    #[test]
    fn test_validation_digit_single_digit_body() {
        // 1 * 2 = 2, 11 - 2 = 9
        assert_eq!(get_validation_digit("1"), Ok(9));
    }

    #[test]
    fn test_validation_digit_weight_cycle_wraps_after_six() {
        // Seven digits exercise the wrap back to weight 2
        assert_eq!(get_validation_digit("1000000"), Ok(9));
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert_eq!(get_validation_digit(""), Err(RutError::EmptyBody));
    }

    #[test]
    fn test_non_digit_body_is_an_error() {
        assert_eq!(
            get_validation_digit("90k3943"),
            Err(RutError::InvalidBodyCharacter {
                character: 'k',
                position: 2,
            })
        );
    }

    #[test]
    fn test_check_char_mapping() {
        assert_eq!(check_char(11), '0');
        assert_eq!(check_char(10), 'k');
        assert_eq!(check_char(6), '6');
        assert_eq!(check_char(9), '9');
    }
}
