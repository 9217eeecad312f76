//! RUT cleaning and canonical formatting
//!
//! Pure character-level transforms: stripping separators and foreign
//! characters down to the digits-plus-check-character core, and
//! re-inserting thousands dots and the check-character hyphen.

/// Strips everything that is not part of a RUT.
///
/// Keeps ASCII digits and `k`/`K` (case preserved, order preserved) and
/// drops every other character. Purely a filter: it does not check the
/// result for a valid shape. Idempotent.
///
/// # Arguments
/// - `rut` - Any string, formatted or not
///
/// # Returns
/// The retained characters, possibly empty
pub fn clean_rut(rut: &str) -> String {
    rut.chars()
        .filter(|&c| c.is_ascii_digit() || c == 'k' || c == 'K')
        .collect()
}

/// Formats a RUT into its canonical dotted, hyphenated form.
///
/// The input is cleaned first, so both "192009235" and "19.200.923-5"
/// come out as "19.200.923-5". The last cleaned character is taken as
/// the check character (its case is preserved); the remaining digits are
/// grouped in threes from the right and joined with dots.
///
/// If fewer than two characters survive cleaning there is no body/check
/// split to make, and the input is returned unchanged.
///
/// # Arguments
/// - `rut` - A raw or formatted RUT string
///
/// # Returns
/// The canonical formatted string, or the input itself when too short
pub fn format_rut(rut: &str) -> String {
    let cleaned = clean_rut(rut);

    if cleaned.len() <= 1 {
        return rut.to_string();
    }

    // Cleaned output is ASCII only, so byte indexing is safe
    let (body, check) = cleaned.split_at(cleaned.len() - 1);

    let mut formatted = String::with_capacity(cleaned.len() + body.len() / 3 + 1);
    for (index, digit) in body.chars().enumerate() {
        if index > 0 && (body.len() - index) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(digit);
    }
    formatted.push('-');
    formatted.push_str(check);

    formatted
}
