//! RUT validation and generation
//!
//! Orchestrates shape recognition, cleaning and the checksum into the
//! two user-facing flows: checking a RUT somebody typed, and deriving
//! the check character for a known body.

use crate::checksum::{check_char, get_validation_digit};
use crate::error::RutError;
use crate::formatting::{clean_rut, format_rut};
use crate::patterns::matches_rut_patterns;

/// Outcome of [`validate_rut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RutValidation {
    /// Whether the input is a well-shaped RUT with a correct check character
    pub is_valid: bool,
    /// The canonically formatted RUT, or the input verbatim when the
    /// shape was rejected
    pub formatted: String,
}

/// A RUT minted from a body by [`get_valid_rut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRut {
    /// Canonical dotted, hyphenated form
    pub formatted: String,
    /// Body digits directly followed by the check character
    pub raw: String,
}

/// Validates a RUT string and returns it canonically formatted.
///
/// The input must already look like a RUT, either fully formatted
/// ("19.200.923-5") or raw ("192009235"). Input of any other shape is
/// rejected without touching it, and echoed back verbatim in
/// `formatted`. When the shape is accepted, `formatted` always carries
/// the canonically reformatted string, even if the check character
/// turns out to be wrong.
///
/// # Arguments
/// - `rut` - The candidate string, exactly as the user provided it
///
/// # Returns
/// A [`RutValidation`] with the verdict and the string to display
pub fn validate_rut(rut: &str) -> RutValidation {
    if !matches_rut_patterns(rut) {
        return RutValidation {
            is_valid: false,
            formatted: rut.to_string(),
        };
    }

    let cleaned = clean_rut(rut);
    RutValidation {
        is_valid: is_valid_rut(&cleaned),
        formatted: format_rut(&cleaned),
    }
}

/// Checks whether a RUT is arithmetically correct.
///
/// The last character is compared against the validation digit computed
/// from the rest. A `k` check character matches case-insensitively.
/// Input that is not shaped like a RUT returns `false`.
pub fn is_valid_rut(rut: &str) -> bool {
    if !matches_rut_patterns(rut) {
        return false;
    }

    let cleaned = clean_rut(rut);
    let mut chars = cleaned.chars();
    let Some(provided) = chars.next_back() else {
        return false;
    };
    let body = chars.as_str();

    match get_validation_digit(body) {
        Ok(11) => provided == '0',
        Ok(10) => provided.eq_ignore_ascii_case(&'k'),
        Ok(digit) => provided.to_digit(10) == Some(u32::from(digit)),
        Err(_) => false,
    }
}

/// Mints a complete RUT from a body by computing its check character.
///
/// The body is cleaned first, so separators are tolerated; what remains
/// must be pure digits. A validation digit of 10 produces a lowercase
/// `k`.
///
/// # Arguments
/// - `body` - The RUT digits without a check character
///
/// # Returns
/// - `Ok(GeneratedRut)` with the formatted and raw canonical forms
/// - `Err(RutError::EmptyBody)` if nothing survives cleaning
/// - `Err(RutError::InvalidBodyCharacter)` if the cleaned body still
///   contains a non-digit (a stray `k`)
pub fn get_valid_rut(body: &str) -> Result<GeneratedRut, RutError> {
    let cleaned = clean_rut(body);
    let digit = get_validation_digit(&cleaned)?;

    let mut raw = cleaned;
    raw.push(check_char(digit));

    Ok(GeneratedRut {
        formatted: format_rut(&raw),
        raw,
    })
}
