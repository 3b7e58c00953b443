//! Numeric rules checked after disambiguation.

use gosnomer_model::alphabet::is_allowed_digit;
use gosnomer_model::{NormalizeError, PlateFormat, Result};

/// Check a reified plate against its chosen format.
///
/// Runs the all-zero run check first, then the region check.
pub fn validate(plate: &str, format: PlateFormat) -> Result<()> {
    check_zero_runs(plate)?;
    check_region(plate, format)
}

/// A maximal run of digits must contain something other than `0`.
fn check_zero_runs(plate: &str) -> Result<()> {
    let zero_run = plate
        .split(|ch: char| !is_allowed_digit(ch))
        .find(|run| !run.is_empty() && run.chars().all(|ch| ch == '0'));
    match zero_run {
        Some(run) => Err(NormalizeError::AllZeroSequence {
            sequence: run.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_region(plate: &str, format: PlateFormat) -> Result<()> {
    if !format.has_three_digit_region() {
        return Ok(());
    }
    let chars: Vec<char> = plate.chars().collect();
    let Some(region) = chars.len().checked_sub(3).map(|start| &chars[start..]) else {
        return Ok(());
    };
    if region[0] == '0' {
        return Err(NormalizeError::LeadingZeroRegion {
            region: region.iter().collect(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_plates() {
        assert!(validate("О001ОО102", PlateFormat::StandardThreeDigitRegion).is_ok());
        assert!(validate("А123ВС77", PlateFormat::Standard).is_ok());
        assert!(validate("УУ000099", PlateFormat::Trailer).is_ok());
    }

    #[test]
    fn rejects_zero_runs_anywhere() {
        assert_eq!(
            validate("О000ОО000", PlateFormat::StandardThreeDigitRegion).unwrap_err(),
            NormalizeError::AllZeroSequence {
                sequence: "000".to_string()
            }
        );
        assert!(validate("А123ВС00", PlateFormat::Standard).is_err());
        assert!(validate("УУ00ОО99", PlateFormat::Moped).is_err());
    }

    #[test]
    fn zero_runs_checked_before_region() {
        assert!(matches!(
            validate("О000ОО012", PlateFormat::StandardThreeDigitRegion),
            Err(NormalizeError::AllZeroSequence { .. })
        ));
    }

    #[test]
    fn three_digit_region_cannot_lead_with_zero() {
        assert_eq!(
            validate("О001ОО001", PlateFormat::StandardThreeDigitRegion).unwrap_err(),
            NormalizeError::LeadingZeroRegion {
                region: "001".to_string()
            }
        );
    }

    #[test]
    fn region_rule_is_limited_to_three_digit_format() {
        // Trailer numbers end in six digits but carry a two-digit region.
        assert!(validate("АВ102077", PlateFormat::Trailer).is_ok());
        assert!(validate("АВ10277", PlateFormat::Taxi).is_ok());
    }
}
