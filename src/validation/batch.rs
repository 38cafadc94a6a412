//! Batch validation.
//!
//! Validates many inputs under one mode. Each input is independent, so the
//! batch may be split across the rayon thread pool; results always come back
//! in input order.

use crate::core::error::Rejection;
use crate::core::mode::Mode;
use crate::core::types::ValidationResult;
use crate::validation::pipeline::FieldValidator;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Outcome of validating one batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Mode every input was validated under.
    pub mode: Mode,
    /// Per-input results, in input order.
    pub results: Vec<ValidationResult>,
    /// Number of accepted inputs.
    pub accepted: usize,
    /// Number of rejected inputs.
    pub rejected: usize,
    /// Rejection counts, keyed by message, in order of first occurrence.
    pub rejections: IndexMap<&'static str, usize>,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl BatchReport {
    fn from_results(mode: Mode, results: Vec<ValidationResult>, duration_ms: u64) -> Self {
        let mut rejections = IndexMap::new();
        let mut accepted = 0;
        for result in &results {
            match result.rejection() {
                None => accepted += 1,
                Some(reason) => *rejections.entry(reason.message()).or_insert(0) += 1,
            }
        }
        let rejected = results.len() - accepted;

        Self {
            mode,
            results,
            accepted,
            rejected,
            rejections,
            duration_ms,
        }
    }

    /// Total number of inputs.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether every input was accepted.
    pub fn all_valid(&self) -> bool {
        self.rejected == 0
    }

    /// How many inputs failed with `reason`.
    pub fn count_of(&self, reason: Rejection) -> usize {
        self.rejections.get(reason.message()).copied().unwrap_or(0)
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        if self.all_valid() {
            format!("✓ All {} input(s) valid as {}", self.total(), self.mode)
        } else {
            format!(
                "✗ {} of {} input(s) rejected as {}",
                self.rejected,
                self.total(),
                self.mode
            )
        }
    }
}

/// Validate every input in `inputs` under `mode`.
pub fn validate_batch<S>(
    validator: &FieldValidator,
    inputs: &[S],
    mode: Mode,
    parallel: bool,
) -> BatchReport
where
    S: AsRef<str> + Sync,
{
    let start = Instant::now();

    let results: Vec<ValidationResult> = if parallel {
        inputs
            .par_iter()
            .map(|input| validator.validate(input.as_ref(), mode))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| validator.validate(input.as_ref(), mode))
            .collect()
    };

    let report = BatchReport::from_results(mode, results, start.elapsed().as_millis() as u64);
    log::debug!(
        "Batch of {} under '{}': {} accepted, {} rejected in {}ms",
        report.total(),
        mode,
        report.accepted,
        report.rejected,
        report.duration_ms
    );
    report
}
