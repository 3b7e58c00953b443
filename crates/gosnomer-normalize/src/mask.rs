use gosnomer_model::alphabet::{is_allowed_digit, is_allowed_letter, is_ambiguous};
use gosnomer_model::{Mask, MaskSymbol, NormalizeError, Result};

/// Classify every character of a sanitized plate.
///
/// Fails with [`NormalizeError::InvalidCharacter`] on the first character
/// outside the plate alphabet.
pub fn build_mask(sanitized: &str) -> Result<Mask> {
    sanitized.chars().map(classify).collect()
}

fn classify(ch: char) -> Result<MaskSymbol> {
    if is_ambiguous(ch) {
        Ok(MaskSymbol::Ambiguous)
    } else if is_allowed_letter(ch) {
        Ok(MaskSymbol::Letter)
    } else if is_allowed_digit(ch) {
        Ok(MaskSymbol::Digit)
    } else {
        Err(NormalizeError::InvalidCharacter { character: ch })
    }
}
