//! Canonical plate formats (GOST R 50577-2018, types 1 through 4Б).
//!
//! A format is a fixed-length template of letter and digit slots. Its
//! textual identifier writes a letter slot as `X` and a digit slot as `9`,
//! e.g. `X999XX99` for an ordinary passenger-car plate.
//!
//! The declaration order of [`PlateFormat`] is the canonical priority
//! order: when callers express no usable preference the first admissible
//! format in this order wins, so ordinary car plates beat the rarer types
//! that share their shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// A single position of a plate template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Letter,
    Digit,
}

impl Slot {
    /// Identifier character: `X` for a letter, `9` for a digit.
    pub fn as_char(self) -> char {
        match self {
            Slot::Letter => 'X',
            Slot::Digit => '9',
        }
    }
}

const L: Slot = Slot::Letter;
const D: Slot = Slot::Digit;

/// One of the six canonical plate templates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PlateFormat {
    /// Passenger cars, trucks and buses with a two-digit region.
    #[serde(rename = "X999XX99")]
    Standard,
    /// Passenger cars, trucks and buses with a three-digit region.
    #[serde(rename = "X999XX999")]
    StandardThreeDigitRegion,
    /// Taxis.
    #[serde(rename = "XX99999")]
    Taxi,
    /// Trailers and semitrailers.
    #[serde(rename = "XX999999")]
    Trailer,
    /// Tractors, self-propelled road-building and other machinery.
    #[serde(rename = "9999XX99")]
    Tractor,
    /// Mopeds.
    #[serde(rename = "XX99XX99")]
    Moped,
}

impl PlateFormat {
    /// Every canonical format, in priority order.
    pub const ALL: [PlateFormat; 6] = [
        PlateFormat::Standard,
        PlateFormat::StandardThreeDigitRegion,
        PlateFormat::Taxi,
        PlateFormat::Trailer,
        PlateFormat::Tractor,
        PlateFormat::Moped,
    ];

    /// Length of the longest canonical format.
    pub const MAX_LEN: usize = 9;

    pub fn as_str(self) -> &'static str {
        match self {
            PlateFormat::Standard => "X999XX99",
            PlateFormat::StandardThreeDigitRegion => "X999XX999",
            PlateFormat::Taxi => "XX99999",
            PlateFormat::Trailer => "XX999999",
            PlateFormat::Tractor => "9999XX99",
            PlateFormat::Moped => "XX99XX99",
        }
    }

    pub fn slots(self) -> &'static [Slot] {
        match self {
            PlateFormat::Standard => &[L, D, D, D, L, L, D, D],
            PlateFormat::StandardThreeDigitRegion => &[L, D, D, D, L, L, D, D, D],
            PlateFormat::Taxi => &[L, L, D, D, D, D, D],
            PlateFormat::Trailer => &[L, L, D, D, D, D, D, D],
            PlateFormat::Tractor => &[D, D, D, D, L, L, D, D],
            PlateFormat::Moped => &[L, L, D, D, L, L, D, D],
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        self.slots().len()
    }

    /// Plate type designation in GOST R 50577-2018.
    pub fn gost_type(self) -> &'static str {
        match self {
            PlateFormat::Standard | PlateFormat::StandardThreeDigitRegion => "1",
            PlateFormat::Taxi => "1Б",
            PlateFormat::Trailer => "2",
            PlateFormat::Tractor => "3",
            PlateFormat::Moped => "4Б",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PlateFormat::Standard => "passenger cars, trucks and buses (2-digit region)",
            PlateFormat::StandardThreeDigitRegion => {
                "passenger cars, trucks and buses (3-digit region)"
            }
            PlateFormat::Taxi => "taxis",
            PlateFormat::Trailer => "trailers and semitrailers",
            PlateFormat::Tractor => "tractors and self-propelled machinery",
            PlateFormat::Moped => "mopeds",
        }
    }

    /// True for the only format whose region code has three digits.
    pub fn has_three_digit_region(self) -> bool {
        self == PlateFormat::StandardThreeDigitRegion
    }

    /// Canonical formats of exactly `len` slots, in priority order.
    pub fn with_len(len: usize) -> impl Iterator<Item = PlateFormat> {
        Self::ALL.into_iter().filter(move |format| format.len() == len)
    }
}

impl fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlateFormat {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| NormalizeError::InvalidPreferredFormat {
                formats: vec![s.to_string()],
            })
    }
}
