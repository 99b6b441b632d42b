//! Rendering of normalised records for the command-line front end.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::gitlab::error::NormalizeError;
use crate::pull_request::{PullRequest, PullRequestSummary};

/// Renders records as human readable text blocks separated by blank lines.
#[must_use]
pub fn render_text(pull_requests: &[PullRequest]) -> String {
    pull_requests
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders records as a pretty-printed JSON array of summaries.
///
/// # Errors
///
/// Returns [`NormalizeError::Io`] if serialisation fails.
pub fn render_json(pull_requests: &[PullRequest]) -> Result<String, NormalizeError> {
    let summaries: Vec<PullRequestSummary> =
        pull_requests.iter().map(PullRequest::summary).collect();
    serde_json::to_string_pretty(&summaries).map_err(|error| NormalizeError::Io {
        message: error.to_string(),
    })
}

fn render_record(pull_request: &PullRequest) -> String {
    let mut lines = vec![
        format!(
            "Loaded MR !{} by {}: {}",
            pull_request.id(),
            pull_request.author().name,
            pull_request.title()
        ),
        format!("State: {}", pull_request.state()),
        format!("URL: {}", pull_request.url()),
        format!("Updated: {}", format_instant(pull_request.updated_at())),
    ];
    if let Some(closed_at) = pull_request.closed_at() {
        lines.push(format!("Closed: {}", format_instant(closed_at)));
    }
    if let Some(merged_at) = pull_request.merged_at() {
        lines.push(format!("Merged: {}", format_instant(merged_at)));
    }
    lines.join("\n")
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
