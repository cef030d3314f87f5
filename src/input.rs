// src/input.rs
// =============================================================================
// Loads the URL list: one URL per line, whitespace trimmed, blank lines
// dropped, order and duplicates preserved. Lines are not validated as URLs;
// whatever survives trimming goes straight to the HTTP client.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let urls = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(urls)
}
