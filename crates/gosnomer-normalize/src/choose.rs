use gosnomer_model::PlateFormat;

use crate::resolve::AdmissibleFormats;

/// First preferred format that is admissible, else the highest-priority
/// admissible format.
pub fn choose_format(preferred: &[PlateFormat], admissible: &AdmissibleFormats) -> PlateFormat {
    let chosen = preferred
        .iter()
        .copied()
        .find(|format| admissible.contains(*format))
        .unwrap_or_else(|| admissible.first());
    tracing::trace!(format = %chosen, "chose format");
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_formats;

    fn admissible(mask: &str) -> AdmissibleFormats {
        resolve_formats(&mask.parse().unwrap()).unwrap()
    }

    #[test]
    fn preference_order_wins() {
        let formats = admissible("***9XX99");
        assert_eq!(
            choose_format(&[PlateFormat::Moped, PlateFormat::Tractor], &formats),
            PlateFormat::Moped
        );
        assert_eq!(
            choose_format(&[PlateFormat::Tractor, PlateFormat::Moped], &formats),
            PlateFormat::Tractor
        );
    }

    #[test]
    fn skips_inadmissible_preferences() {
        let formats = admissible("***9XX99");
        assert_eq!(
            choose_format(&[PlateFormat::Taxi, PlateFormat::Moped], &formats),
            PlateFormat::Moped
        );
    }

    #[test]
    fn falls_back_to_priority_order() {
        let formats = admissible("***9XX99");
        assert_eq!(choose_format(&[], &formats), PlateFormat::Standard);
        assert_eq!(
            choose_format(&[PlateFormat::Trailer], &formats),
            PlateFormat::Standard
        );
    }
}
