//! Search for canonical formats consistent with a mask.
//!
//! Every ambiguous position may be either a letter or a digit slot, so a
//! mask with `k` ambiguous positions stands for `2^k` concrete templates.
//! Formats are indexed by length first; since no canonical format exceeds
//! [`PlateFormat::MAX_LEN`] slots, `k` is bounded before enumeration starts.

use std::collections::BTreeSet;

use gosnomer_model::{Mask, NormalizeError, PlateFormat, Result, Slot};

/// Non-empty set of formats a mask can represent, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissibleFormats {
    formats: BTreeSet<PlateFormat>,
    first: PlateFormat,
}

impl AdmissibleFormats {
    fn from_set(formats: BTreeSet<PlateFormat>) -> Option<Self> {
        let first = formats.first().copied()?;
        Some(Self { formats, first })
    }

    pub fn contains(&self, format: PlateFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Highest-priority admissible format.
    pub fn first(&self) -> PlateFormat {
        self.first
    }

    pub fn iter(&self) -> impl Iterator<Item = PlateFormat> + '_ {
        self.formats.iter().copied()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn into_set(self) -> BTreeSet<PlateFormat> {
        self.formats
    }
}

/// Every canonical format reachable from `mask`.
///
/// Fails with [`NormalizeError::NoMatchingFormat`] carrying the rendered
/// mask when nothing matches.
pub fn resolve_formats(mask: &Mask) -> Result<AdmissibleFormats> {
    let candidates: Vec<PlateFormat> = PlateFormat::with_len(mask.len()).collect();
    let mut found = BTreeSet::new();

    if !candidates.is_empty() {
        let ambiguous = mask.ambiguous_positions();
        let mut attempt: Vec<Slot> = mask
            .symbols()
            .iter()
            .map(|symbol| symbol.fixed_slot().unwrap_or(Slot::Letter))
            .collect();

        // Bit `i` of `subset` turns ambiguous position `i` into a digit slot.
        for subset in 0u32..(1 << ambiguous.len()) {
            for (bit, &position) in ambiguous.iter().enumerate() {
                attempt[position] = if subset & (1 << bit) == 0 {
                    Slot::Letter
                } else {
                    Slot::Digit
                };
            }
            if let Some(format) = candidates
                .iter()
                .find(|format| format.slots() == attempt.as_slice())
            {
                found.insert(*format);
            }
        }
    }

    let admissible = AdmissibleFormats::from_set(found).ok_or_else(|| {
        NormalizeError::NoMatchingFormat {
            mask: mask.to_string(),
        }
    })?;
    tracing::debug!(
        mask = %mask,
        admissible = ?admissible.iter().map(PlateFormat::as_str).collect::<Vec<_>>(),
        "resolved formats"
    );
    Ok(admissible)
}

/// Resolve a mask given in its text form (`X`, `9`, `*`).
pub fn find_possible_formats(mask: &str) -> Result<BTreeSet<PlateFormat>> {
    let mask: Mask = mask.parse()?;
    resolve_formats(&mask).map(AdmissibleFormats::into_set)
}
