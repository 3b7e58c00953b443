//! Positional classification of a sanitized plate.

use std::fmt;
use std::str::FromStr;

use crate::error::NormalizeError;
use crate::format::Slot;

/// Classification of one plate character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskSymbol {
    Letter,
    Digit,
    /// `0` or `О`: either a digit or a letter slot.
    Ambiguous,
}

impl MaskSymbol {
    pub fn as_char(self) -> char {
        match self {
            MaskSymbol::Letter => 'X',
            MaskSymbol::Digit => '9',
            MaskSymbol::Ambiguous => '*',
        }
    }

    /// The slot this symbol forces, or `None` when ambiguous.
    pub fn fixed_slot(self) -> Option<Slot> {
        match self {
            MaskSymbol::Letter => Some(Slot::Letter),
            MaskSymbol::Digit => Some(Slot::Digit),
            MaskSymbol::Ambiguous => None,
        }
    }
}

/// Mask of a sanitized plate, one symbol per character.
///
/// Renders as `X` (letter), `9` (digit) and `*` (ambiguous), e.g. `XX*9XX99`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mask {
    symbols: Vec<MaskSymbol>,
}

impl Mask {
    pub fn new(symbols: Vec<MaskSymbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[MaskSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Indices of ambiguous symbols, ascending.
    pub fn ambiguous_positions(&self) -> Vec<usize> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, symbol)| **symbol == MaskSymbol::Ambiguous)
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromIterator<MaskSymbol> for Mask {
    fn from_iter<I: IntoIterator<Item = MaskSymbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Mask {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| match ch {
                'X' => Ok(MaskSymbol::Letter),
                '9' => Ok(MaskSymbol::Digit),
                '*' => Ok(MaskSymbol::Ambiguous),
                other => Err(NormalizeError::InvalidCharacter { character: other }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_parses() {
        let mask: Mask = "XX*9XX99**99".parse().unwrap();
        assert_eq!(mask.len(), 12);
        assert_eq!(mask.to_string(), "XX*9XX99**99");
        assert_eq!(mask.ambiguous_positions(), vec![2, 8, 9]);
    }

    #[test]
    fn empty_mask() {
        let mask: Mask = "".parse().unwrap();
        assert!(mask.is_empty());
        assert_eq!(mask.to_string(), "");
    }

    #[test]
    fn rejects_unknown_symbols() {
        let err = "X9?".parse::<Mask>().unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::InvalidCharacter { character: '?' }
        ));
    }
}
