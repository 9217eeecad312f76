//! RUT shape recognition
//!
//! Recognizes the two accepted input shapes before any cleaning happens:
//! the fully formatted form ("19.200.923-5") and the raw form
//! ("192009235"). Anything else is rejected outright, so partially
//! formatted input such as "19200923-5" or "14.400.4035" never reaches
//! the checksum.

use regex::Regex;
use std::sync::LazyLock;

/// Formatted shape: 1-3 leading digits, zero or more `.XXX` groups,
/// a hyphen, and a single check character.
static RUT_FORMATTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{3})*-[0-9kK]$").unwrap());

/// Raw shape: a digit, any further digits, ending in a digit or `k`/`K`
/// (the last character doubles as the check character).
static RUT_RAW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9][0-9]*[0-9kK]$").unwrap());

/// Checks whether a string has one of the two accepted RUT shapes.
///
/// Both patterns are anchored at both ends; a RUT embedded in a longer
/// string does not match. The two shapes are checked independently and
/// combined with a logical OR, so a bare "1-9" is accepted via the
/// formatted shape even though the raw shape needs two digits.
///
/// # Arguments
/// - `input` - The raw, uncleaned candidate string
///
/// # Returns
/// `true` if the string is shaped like a RUT (says nothing about the
/// check character being arithmetically correct)
pub fn matches_rut_patterns(input: &str) -> bool {
    RUT_FORMATTED.is_match(input) || RUT_RAW.is_match(input)
}
