use std::time::Duration;

use serde::Serialize;

use gnat::args::OutputFormat;
use gnat::engine::{RunConfig, RunResult};
use gnat::error::AppResult;
use gnat::http::RequestOutcome;

#[derive(Debug, Serialize)]
struct JsonSummary<'run> {
    url: &'run str,
    method: &'static str,
    concurrency: usize,
    duration_ms: u64,
    #[serde(flatten)]
    result: &'run RunResult,
    requests_per_second: serde_json::Number,
}

pub(crate) fn print_summary(
    config: &RunConfig,
    result: &RunResult,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(result) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", summary_json(config, result)?);
        }
    }
    Ok(())
}

pub(crate) fn summary_lines(result: &RunResult) -> Vec<String> {
    let total = result.total_requests();
    let mut lines = vec![format!(
        "Load complete. Sent {} requests in {}",
        total,
        format_duration(result.elapsed())
    )];

    if total == 0 {
        lines.push("No requests were sent.".to_owned());
        return lines;
    }

    lines.push(format!(
        "Average requests per second: {}",
        format_x100(result.requests_per_second_x100())
    ));
    lines.push("Response status codes:".to_owned());
    for (&status, &count) in result.status_counts() {
        if count == 0 {
            continue;
        }
        lines.push(format!(
            "  {}: {} times ({}%)",
            status_label(status),
            count,
            format_x100(result.share_x100(status))
        ));
    }
    lines
}

pub(crate) fn summary_json(config: &RunConfig, result: &RunResult) -> AppResult<String> {
    let summary = JsonSummary {
        url: config.url().as_str(),
        method: config.method().as_str(),
        concurrency: config.concurrency(),
        duration_ms: u64::try_from(config.duration().as_millis()).unwrap_or(u64::MAX),
        result,
        requests_per_second: rate_number(result.requests_per_second_x100())?,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Exact decimal JSON number for a value scaled by 100.
fn rate_number(value_x100: u64) -> AppResult<serde_json::Number> {
    Ok(format_x100(value_x100).parse()?)
}

fn status_label(status: u16) -> String {
    if status == RequestOutcome::TRANSPORT_FAILURE.status() {
        "failed".to_owned()
    } else {
        status.to_string()
    }
}

/// Renders a value scaled by 100 with two decimals.
pub(crate) fn format_x100(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

/// Renders a duration as seconds with millisecond precision, e.g. `5.012s`.
pub(crate) fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    let secs = millis / 1000;
    let rem = millis % 1000;
    if rem == 0 {
        format!("{}s", secs)
    } else {
        format!("{}.{:03}s", secs, rem)
    }
}
