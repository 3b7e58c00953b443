//! Read-only reference data for Russian registration plates.
//!
//! Everything here is immutable configuration shared by every
//! normalization call: the permitted alphabets (GOST R 50577-2018), the
//! closed set of canonical plate formats, the positional [`Mask`] produced
//! from a sanitized plate, and the error taxonomy.

pub mod alphabet;
pub mod error;
pub mod format;
pub mod mask;
pub mod options;

pub use alphabet::{
    ALLOWED_DIGITS, ALLOWED_LETTERS, ALLOWED_SYMBOLS, AMBIGUOUS_DIGIT, AMBIGUOUS_LETTER,
};
pub use error::{NormalizeError, Result};
pub use format::{PlateFormat, Slot};
pub use mask::{Mask, MaskSymbol};
pub use options::NormalizationOptions;
