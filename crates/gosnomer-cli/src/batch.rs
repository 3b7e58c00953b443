//! Normalization of many plates at once.

use std::io::{self, BufRead};
use std::time::Instant;

use gosnomer_model::{NormalizeError, PlateFormat};
use gosnomer_normalize::{NormalizedPlate, Normalizer};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Result of normalizing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateOutcome {
    pub input: String,
    pub result: Result<NormalizedPlate, NormalizeError>,
}

impl PlateOutcome {
    /// Flat, serializable view used for JSON output.
    pub fn record(&self) -> PlateRecord<'_> {
        match &self.result {
            Ok(normalized) => PlateRecord {
                input: &self.input,
                plate: Some(&normalized.plate),
                format: Some(normalized.format),
                error: None,
            },
            Err(error) => PlateRecord {
                input: &self.input,
                plate: None,
                format: None,
                error: Some(error.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlateRecord<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<PlateFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<PlateOutcome>,
}

impl BatchReport {
    pub fn normalized_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.normalized_count()
    }

    pub fn has_errors(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Normalize each input, keeping failures alongside successes.
pub fn normalize_batch<I, S>(normalizer: &Normalizer, inputs: I) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let span = info_span!("normalize_batch");
    let _guard = span.enter();
    let start = Instant::now();

    let outcomes: Vec<PlateOutcome> = inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref().to_string();
            let result = normalizer.normalize(&input);
            if let Err(error) = &result {
                debug!(input = %redact_value(&input), %error, "plate rejected");
            }
            PlateOutcome { input, result }
        })
        .collect();

    let report = BatchReport { outcomes };
    info!(
        total = report.outcomes.len(),
        normalized = report.normalized_count(),
        failed = report.failed_count(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    report
}

/// Non-empty, trimmed lines of `reader`.
pub fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
