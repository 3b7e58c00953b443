//! Correction of manual-entry errors in Russian vehicle registration plates.
//!
//! A plate passes through six stages:
//! - **sanitize**: strip whitespace, upper-case, map Latin look-alikes
//! - **mask**: classify each character as letter, digit or ambiguous
//! - **resolve**: find every canonical format the mask can represent
//! - **choose**: pick one format using caller preference
//! - **reify**: rewrite ambiguous `0`/`О` characters to fit the format
//! - **validate**: reject all-zero numeric runs and bad 3-digit regions
//!
//! ```
//! use gosnomer_normalize::normalize;
//!
//! assert_eq!(normalize("YY1239O", &[]).unwrap(), "УУ12390");
//! assert_eq!(normalize(12340078, &[]).unwrap(), "1234ОО78");
//! assert_eq!(
//!     normalize("о001тр98", &["9999XX99", "XX99XX99", "X999XX99"]).unwrap(),
//!     "0001ТР98"
//! );
//! ```

pub mod choose;
pub mod mask;
pub mod pipeline;
pub mod reify;
pub mod resolve;
pub mod sanitize;
pub mod validate;

pub use choose::choose_format;
pub use mask::build_mask;
pub use pipeline::{NormalizedPlate, Normalizer, normalize, normalize_with};
pub use reify::reify;
pub use resolve::{AdmissibleFormats, find_possible_formats, resolve_formats};
pub use sanitize::sanitize;
pub use validate::validate;

pub use gosnomer_model::{NormalizationOptions, NormalizeError, PlateFormat, Result, Slot};
