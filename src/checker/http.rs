// src/checker/http.rs
// =============================================================================
// This module probes URLs by making HTTP requests and classifies the outcome.
//
// Key functionality:
// - One GET request per URL, response body never read
// - Redirects are NOT followed, so 3xx codes surface as REDIRECT
//   (mirrors curl without -L)
// - Timeouts and transport errors become their own buckets instead of
//   aborting the run
// =============================================================================

use anyhow::Result;
use reqwest::{redirect, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classification bucket assigned to a single probe.
///
/// Precedence matters: exact 404 is checked before the generic 4xx bucket,
/// so a 404 is always NOT_FOUND and never CLIENT_ERROR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// 2xx response
    Ok,
    /// 3xx response (not followed)
    Redirect,
    /// 4xx response other than 404
    ClientError,
    /// 5xx response
    ServerError,
    /// Exactly 404; these URLs also feed the end-of-run summary
    NotFound,
    /// A response arrived but the code fits no bucket (1xx, out-of-range)
    Unknown,
    /// The request exceeded the per-URL timeout
    Timeout,
    /// Any other transport failure (DNS, refused connection, bad URL, TLS)
    Error,
}

impl CheckStatus {
    /// Human-readable label used in the per-URL report line.
    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Redirect => "REDIRECT",
            CheckStatus::ClientError => "CLIENT ERROR",
            CheckStatus::ServerError => "SERVER ERROR",
            CheckStatus::NotFound => "NOT FOUND",
            CheckStatus::Unknown => "UNKNOWN",
            CheckStatus::Timeout => "TIMEOUT",
            CheckStatus::Error => "ERROR",
        }
    }

    /// Glyph printed ahead of the URL in the report line.
    pub fn glyph(self) -> &'static str {
        match self {
            CheckStatus::Ok => "✅",
            CheckStatus::Redirect => "↗️ ",
            CheckStatus::ClientError => "⚠️ ",
            CheckStatus::ServerError => "💥",
            CheckStatus::NotFound => "❌",
            CheckStatus::Unknown => "❓",
            CheckStatus::Timeout => "⏰",
            CheckStatus::Error => "💔",
        }
    }
}

/// The outcome of probing a single URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// The URL that was probed, exactly as read from the input file
    pub url: String,
    /// Classification bucket
    pub status: CheckStatus,
    /// Numeric status code, when a response arrived at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Transport error detail for the Error bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn is_not_found(&self) -> bool {
        self.status == CheckStatus::NotFound
    }
}

/// Builds the HTTP client shared by every probe in a run.
///
/// Redirect following is disabled so the reported code is the initial one,
/// and the timeout covers the whole request including connect time.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// Probes a single URL and classifies the result.
///
/// Never fails: every failure mode maps to a CheckResult bucket so the
/// caller's loop can keep going.
pub async fn check_url(client: &Client, url: &str) -> CheckResult {
    match client.get(url).send().await {
        // Response in hand; the body is dropped unread
        Ok(response) => classify_status(url, response.status()),
        Err(e) => classify_error(url, e),
    }
}

// Buckets a received status code. 404 is special-cased ahead of the generic
// 4xx arm so it lands in NotFound.
fn classify_status(url: &str, code: StatusCode) -> CheckResult {
    let status = match code.as_u16() {
        404 => CheckStatus::NotFound,
        200..=299 => CheckStatus::Ok,
        300..=399 => CheckStatus::Redirect,
        400..=499 => CheckStatus::ClientError,
        500..=599 => CheckStatus::ServerError,
        _ => CheckStatus::Unknown,
    };

    CheckResult {
        url: url.to_string(),
        status,
        code: Some(code.as_u16()),
        detail: None,
    }
}

// Buckets a reqwest error: timeouts get their own status, everything else
// (DNS failure, refused connection, invalid URL, TLS trouble) is Error with
// the display string kept as detail.
fn classify_error(url: &str, error: reqwest::Error) -> CheckResult {
    if error.is_timeout() {
        CheckResult {
            url: url.to_string(),
            status: CheckStatus::Timeout,
            code: None,
            detail: None,
        }
    } else {
        CheckResult {
            url: url.to_string(),
            status: CheckStatus::Error,
            code: None,
            detail: Some(error.to_string()),
        }
    }
}
