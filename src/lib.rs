//! Chilean RUT validation and formatting
//!
//! Pure string utilities for working with Chilean RUT identifiers:
//! - Recognize the two accepted input shapes (formatted and raw)
//! - Strip separators down to the canonical digits-plus-check-character core
//! - Compute and verify the modulo-11 weighted check character
//! - Render the canonical dotted, hyphenated form
//! - Mint a complete RUT from a bare body
//!
//! # Architecture
//!
//! The crate is organized into small, stateless modules:
//! - `patterns` - Anchored shape recognition for formatted and raw input
//! - `formatting` - Character cleaning and thousands-dot formatting
//! - `checksum` - The weighted modulo-11 validation digit
//! - `validation` - Validate-and-format and generation flows
//! - `error` - Typed errors for checksum input violations
//!
//! Every function is a pure transform of its arguments; there is no
//! configuration, no I/O and no shared state, so calls are safe from any
//! thread.

pub mod checksum;
pub mod error;
pub mod formatting;
pub mod patterns;
pub mod validation;

// Re-export the public surface at the crate root
pub use checksum::{check_char, get_validation_digit};
pub use error::RutError;
pub use formatting::{clean_rut, format_rut};
pub use patterns::matches_rut_patterns;
pub use validation::{get_valid_rut, is_valid_rut, validate_rut, GeneratedRut, RutValidation};
