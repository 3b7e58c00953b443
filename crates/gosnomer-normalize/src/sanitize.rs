//! Input clean-up ahead of classification.

use gosnomer_model::alphabet::lookalike;

/// Remove whitespace, upper-case and map look-alike characters.
///
/// Characters outside the plate alphabet pass through unchanged; they are
/// rejected by [`crate::build_mask`].
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .map(lookalike)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(sanitize("   оо12345  "), "ОО12345");
        assert_eq!(sanitize("А 123\tВС\n77"), "А123ВС77");
    }

    #[test]
    fn maps_latin_lookalikes() {
        assert_eq!(sanitize("YY1239O"), "УУ1239О");
        assert_eq!(sanitize("abcehkmoptxy"), "АВСЕНКМОРТХУ");
        assert_eq!(sanitize("i"), "1");
    }

    #[test]
    fn maps_cyrillic_ze_to_three() {
        assert_eq!(sanitize("з"), "3");
        assert_eq!(sanitize("З"), "3");
    }

    #[test]
    fn unknown_characters_fall_through() {
        assert_eq!(sanitize("гн99900"), "ГН99900");
        assert_eq!(sanitize("q-1"), "Q-1");
    }
}
