use gosnomer_model::{AMBIGUOUS_DIGIT, AMBIGUOUS_LETTER, Mask, MaskSymbol, PlateFormat, Slot};

/// Rewrite ambiguous characters to the digit or letter the format demands.
///
/// `sanitized`, `mask` and `format` describe the same plate and have equal
/// lengths; positions that are not ambiguous are copied unchanged.
pub fn reify(sanitized: &str, mask: &Mask, format: PlateFormat) -> String {
    sanitized
        .chars()
        .zip(mask.symbols())
        .zip(format.slots())
        .map(|((ch, symbol), slot)| match (symbol, slot) {
            (MaskSymbol::Ambiguous, Slot::Digit) => AMBIGUOUS_DIGIT,
            (MaskSymbol::Ambiguous, Slot::Letter) => AMBIGUOUS_LETTER,
            _ => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::build_mask;

    #[test]
    fn rewrites_only_ambiguous_positions() {
        let plate = "О001ТР98";
        let mask = build_mask(plate).unwrap();
        assert_eq!(reify(plate, &mask, PlateFormat::Standard), "О001ТР98");
        assert_eq!(reify(plate, &mask, PlateFormat::Tractor), "0001ТР98");
        assert_eq!(reify(plate, &mask, PlateFormat::Moped), "ОО01ТР98");
    }

    #[test]
    fn letter_o_becomes_digit() {
        let plate = "1234ОО7О";
        let mask = build_mask(plate).unwrap();
        assert_eq!(reify(plate, &mask, PlateFormat::Tractor), "1234ОО70");
    }
}
