// src/checker/mod.rs
// =============================================================================
// URL checking logic.
//
// Submodules:
// - http: issues the status probes and buckets the outcomes
// - summary: aggregates the 404s for the end-of-run report
// =============================================================================

mod http;
mod summary;

// Re-export the public API so callers write `checker::check_url()` instead
// of `checker::http::check_url()`
pub use http::{build_client, check_url, CheckResult, CheckStatus};
pub use summary::RunSummary;
