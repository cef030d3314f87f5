// src/main.rs
// =============================================================================
// Entry point of the CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the URL list from the input file
// 3. Probe each URL once, in order, printing a report line as it completes
// 4. Print the summary (or one JSON document with --json)
//
// The run itself never fails the process: timeouts and broken URLs are part
// of the report, not errors. Only unexpected internal failures exit non-zero.
// =============================================================================

mod checker;
mod cli;
mod input;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::time::Duration;

use checker::{CheckResult, CheckStatus, RunSummary};
use cli::Cli;

#[tokio::main]
async fn main() {
    // Bad arguments never reach this point; clap already printed usage and
    // exited non-zero from parse()
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(2);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // A missing input file is reported, not fatal: same message and graceful
    // return as checking a list of zero URLs
    if !cli.file.exists() {
        println!("Error: File '{}' not found.", cli.file.display());
        return Ok(());
    }

    let urls = input::load_url_list(&cli.file)?;
    if urls.is_empty() {
        println!("No URLs found in '{}'", cli.file.display());
        return Ok(());
    }

    if !cli.json {
        println!("Checking {} URLs from '{}'...", urls.len(), cli.file.display());
        println!("{}", "-".repeat(60));
    }

    let client = checker::build_client(Duration::from_secs(cli.timeout))?;

    // Strictly sequential: one probe in flight at a time, results in input
    // order, a failed probe never stops the loop
    let mut results = Vec::with_capacity(urls.len());
    for (index, url) in urls.iter().enumerate() {
        let result = checker::check_url(&client, url).await;
        if !cli.json {
            print_check_line(index + 1, &result, cli.timeout);
        }
        results.push(result);
    }

    let summary = RunSummary::from_results(&results);
    if cli.json {
        print_json_report(&results, &summary)?;
    } else {
        print_summary(&summary);
    }

    Ok(())
}

// One line per probe, printed as soon as the probe finishes. The index is
// 1-based and right-aligned to at least three digits.
fn print_check_line(index: usize, result: &CheckResult, timeout_secs: u64) {
    match result.status {
        CheckStatus::Timeout => {
            println!("[{index:3}] ⏰ {} - TIMEOUT ({timeout_secs}s)", result.url);
        }
        CheckStatus::Error => {
            let detail = result.detail.as_deref().unwrap_or("unknown error");
            println!("[{index:3}] 💔 {} - Error: {detail}", result.url);
        }
        status => {
            let code = result.code.map_or_else(String::new, |c| c.to_string());
            println!(
                "[{index:3}] {} {} - Status Code: {code} ({})",
                status.glyph(),
                result.url,
                status.label()
            );
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY:");
    println!("Total URLs checked: {}", summary.total);
    println!("404 Not Found URLs: {}", summary.not_found);

    if !summary.not_found_urls.is_empty() {
        println!("\n404 URLs:");
        for url in &summary.not_found_urls {
            println!("  - {url}");
        }
    }
}

// --json replaces all human output with a single pretty-printed document
fn print_json_report(results: &[CheckResult], summary: &RunSummary) -> Result<()> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        results: &'a [CheckResult],
        summary: &'a RunSummary,
    }

    let report = JsonReport { results, summary };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
