//! Error types for checksum and generation inputs
//!
//! Validation and formatting never fail: any string maps to a defined
//! result. Only the checksum engine has an input contract (a non-empty,
//! all-digit body), and violations surface as typed errors instead of
//! wrong answers.

use thiserror::Error;

/// Errors returned when a RUT body violates the checksum input contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RutError {
    /// The body contained no digits, so there is nothing to checksum.
    #[error("rut body is empty, nothing to checksum")]
    EmptyBody,

    /// A character other than an ASCII digit reached the checksum engine.
    ///
    /// Bodies must be pre-cleaned by the caller; `position` is the 0-based
    /// index of the offending character in the body as given.
    #[error("invalid character {character:?} at position {position} in rut body")]
    InvalidBodyCharacter { character: char, position: usize },
}
