// src/checker/summary.rs
// =============================================================================
// End-of-run aggregate: total URLs checked plus every URL that came back as
// an exact 404, in input order, duplicates included.
// =============================================================================

use serde::Serialize;

use super::http::CheckResult;

/// Aggregate report built once after the last probe completes.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Total URLs probed, independent of how many errored or timed out
    pub total: usize,
    /// How many probes were classified NOT_FOUND
    pub not_found: usize,
    /// The NOT_FOUND URLs, preserving input order and duplicates
    pub not_found_urls: Vec<String>,
}

impl RunSummary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let not_found_urls: Vec<String> = results
            .iter()
            .filter(|r| r.is_not_found())
            .map(|r| r.url.clone())
            .collect();

        RunSummary {
            total: results.len(),
            not_found: not_found_urls.len(),
            not_found_urls,
        }
    }
}
