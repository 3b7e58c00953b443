//! Top-level normalization entry points.

use std::fmt::Display;

use serde::Serialize;

use gosnomer_model::{NormalizationOptions, PlateFormat, Result};

use crate::choose::choose_format;
use crate::mask::build_mask;
use crate::reify::reify;
use crate::resolve::resolve_formats;
use crate::sanitize::sanitize;
use crate::validate::validate;

/// A corrected plate and the format it was read as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPlate {
    pub plate: String,
    pub format: PlateFormat,
}

/// Reusable normalizer holding validated options.
///
/// Preferences are parsed once, so batch pipelines pay for validation a
/// single time instead of per plate.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizationOptions,
}

impl Normalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    /// Build from textual format identifiers such as `"X999XX99"`.
    pub fn from_preferred<S: AsRef<str>>(preferred: &[S]) -> Result<Self> {
        NormalizationOptions::from_preferred(preferred).map(Self::new)
    }

    /// Normalize a single plate.
    pub fn normalize(&self, input: impl Display) -> Result<NormalizedPlate> {
        normalize_with(input, &self.options)
    }
}

/// Normalize a plate with typed options.
pub fn normalize_with(
    input: impl Display,
    options: &NormalizationOptions,
) -> Result<NormalizedPlate> {
    let raw = input.to_string();
    let sanitized = sanitize(&raw);
    tracing::trace!(raw = %raw, sanitized = %sanitized, "sanitized plate");

    let mask = build_mask(&sanitized)?;
    let admissible = resolve_formats(&mask)?;
    let format = choose_format(&options.preferred_formats, &admissible);
    let plate = reify(&sanitized, &mask, format);
    validate(&plate, format)?;

    tracing::debug!(mask = %mask, format = %format, "normalized plate");
    Ok(NormalizedPlate { plate, format })
}

/// Correct a manually entered plate.
///
/// `preferred` lists format identifiers in order of preference and decides
/// between readings when a plate fits several formats. It is validated
/// before the plate is looked at, so an unknown identifier fails even for
/// an otherwise valid plate.
pub fn normalize(input: impl Display, preferred: &[&str]) -> Result<String> {
    let options = NormalizationOptions::from_preferred(preferred)?;
    normalize_with(input, &options).map(|normalized| normalized.plate)
}
