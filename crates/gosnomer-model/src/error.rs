use thiserror::Error;

/// Reasons a plate cannot be normalized.
///
/// Every variant rejects the input as a whole; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A preference entry is not a canonical format identifier.
    #[error("preferred formats contain unknown entries: {}", quoted(.formats))]
    InvalidPreferredFormat { formats: Vec<String> },

    /// A sanitized character is outside the plate alphabet.
    #[error("invalid character: \"{character}\"")]
    InvalidCharacter { character: char },

    /// No canonical format is reachable from the mask.
    #[error("invalid format: \"{mask}\"")]
    NoMatchingFormat { mask: String },

    /// A numeric run of the result consists only of zeros.
    #[error("plate cannot contain an all-zero numeric sequence: \"{sequence}\"")]
    AllZeroSequence { sequence: String },

    /// A three-digit region code starts with zero.
    #[error("three-digit region cannot start with zero: \"{region}\"")]
    LeadingZeroRegion { region: String },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
