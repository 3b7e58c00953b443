//! Caller configuration for plate normalization.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{NormalizeError, Result};
use crate::format::PlateFormat;

/// Options for normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Formats to pick, in order, when a plate can be read several ways.
    ///
    /// For example `о001тр98` fits a car, a tractor and a moped plate; with
    /// `[Tractor, ...]` first it becomes `0001ТР98`. When no entry matches,
    /// the first admissible format in [`PlateFormat::ALL`] order is used.
    pub preferred_formats: Vec<PlateFormat>,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse textual format identifiers.
    ///
    /// Fails with [`NormalizeError::InvalidPreferredFormat`] listing every
    /// unknown entry, sorted and without duplicates.
    pub fn from_preferred<S: AsRef<str>>(preferred: &[S]) -> Result<Self> {
        let mut formats = Vec::with_capacity(preferred.len());
        let mut unknown = BTreeSet::new();
        for entry in preferred {
            let entry = entry.as_ref();
            match entry.parse::<PlateFormat>() {
                Ok(format) => formats.push(format),
                Err(_) => {
                    unknown.insert(entry.to_string());
                }
            }
        }
        if !unknown.is_empty() {
            return Err(NormalizeError::InvalidPreferredFormat {
                formats: unknown.into_iter().collect(),
            });
        }
        Ok(Self::new().with_preferred_formats(formats))
    }

    pub fn with_preferred_formats(mut self, formats: Vec<PlateFormat>) -> Self {
        self.preferred_formats = formats;
        self
    }

    /// Append a format to the end of the preference list.
    pub fn prefer(mut self, format: PlateFormat) -> Self {
        self.preferred_formats.push(format);
        self
    }
}
