//! Builds canonical pull request records from GitLab REST payloads.
//!
//! Building a record never fails. Missing author fields fall back to
//! placeholder values and `null` timestamps become `None`. Malformed JSON is
//! rejected earlier, by the decoding helpers in this module.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::error::NormalizeError;
use super::models::{GitLabMergeRequestRest, GitLabRestAuthor};
use super::state::to_canonical;
use crate::pull_request::{PullRequest, PullRequestAuthor, RemoteProvider};

/// Author name used when GitLab reports no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Instant substituted for timestamp text that cannot be parsed.
///
/// This is the Unix epoch, so a genuine `1970-01-01T00:00:00Z` reads the same
/// as an unparsable value. GitLab never emits that instant for a merge request.
pub const INVALID_INSTANT: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Builds the canonical record for a REST merge request.
///
/// The record keeps only a weak reference to `provider`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use gitlab_normalizer::gitlab::{GitLabRemote, decode_merge_request, pull_request_from_rest};
/// use gitlab_normalizer::pull_request::{PullRequestState, RemoteProvider};
///
/// let provider: Arc<dyn RemoteProvider> =
///     Arc::new(GitLabRemote::parse("https://gitlab.com/group/project").expect("valid remote"));
/// let raw = decode_merge_request(
///     r#"{"id": 1, "iid": 42, "author": null, "title": "Tidy", "description": "",
///         "state": "locked", "created_at": "2024-01-01T00:00:00Z",
///         "updated_at": "2024-01-02T00:00:00Z", "closed_at": null, "merged_at": null,
///         "web_url": "https://gitlab.com/group/project/-/merge_requests/42"}"#,
/// )
/// .expect("valid payload");
///
/// let pull_request = pull_request_from_rest(raw, &provider);
/// assert_eq!(pull_request.id(), "42");
/// assert_eq!(pull_request.state(), PullRequestState::Closed);
/// assert_eq!(pull_request.author().name, "Unknown");
/// ```
#[must_use]
pub fn pull_request_from_rest(
    raw: GitLabMergeRequestRest,
    provider: &Arc<dyn RemoteProvider>,
) -> PullRequest {
    tracing::debug!(
        "normalising GitLab merge request !{} ({}) from {}/{}",
        raw.iid,
        raw.state.as_str(),
        provider.domain(),
        provider.path()
    );

    PullRequest {
        provider: Arc::downgrade(provider),
        author: author_from_rest(raw.author),
        id: raw.iid.to_string(),
        title: raw.title,
        url: raw.web_url,
        state: to_canonical(raw.state),
        updated_at: parse_instant(&raw.updated_at),
        closed_at: raw.closed_at.as_deref().map(parse_instant),
        merged_at: raw.merged_at.as_deref().map(parse_instant),
    }
}

impl GitLabMergeRequestRest {
    /// Converts this payload into a canonical record.
    ///
    /// See [`pull_request_from_rest`].
    #[must_use]
    pub fn into_pull_request(self, provider: &Arc<dyn RemoteProvider>) -> PullRequest {
        pull_request_from_rest(self, provider)
    }
}

fn author_from_rest(author: Option<GitLabRestAuthor>) -> PullRequestAuthor {
    author.map_or_else(
        || PullRequestAuthor {
            name: UNKNOWN_AUTHOR.to_owned(),
            avatar_url: String::new(),
            url: String::new(),
        },
        |value| PullRequestAuthor {
            name: value.name,
            avatar_url: value.avatar_url.unwrap_or_default(),
            url: value.web_url,
        },
    )
}

/// Parses GitLab timestamp text into a UTC instant.
///
/// Accepts RFC 3339 timestamps (any offset, optional fractional seconds),
/// date-times without an offset, which are read as UTC, and bare
/// `YYYY-MM-DD` dates, which resolve to midnight UTC. Anything else yields
/// [`INVALID_INSTANT`].
#[must_use]
pub fn parse_instant(text: &str) -> DateTime<Utc> {
    parse_timestamp(text).unwrap_or_else(|| {
        tracing::warn!("unparsable GitLab timestamp {text:?}; substituting invalid instant");
        INVALID_INSTANT
    })
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|local| local.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
}

/// Decodes a single REST merge request payload.
///
/// # Errors
///
/// Returns [`NormalizeError::Payload`] when the text is not a merge request
/// object.
pub fn decode_merge_request(json: &str) -> Result<GitLabMergeRequestRest, NormalizeError> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes either one REST merge request object or an array of them, as
/// returned by the single-item and listing endpoints respectively.
///
/// # Errors
///
/// Returns [`NormalizeError::Payload`] when the text is not JSON or an item
/// does not match the merge request shape.
pub fn decode_merge_requests(json: &str) -> Result<Vec<GitLabMergeRequestRest>, NormalizeError> {
    let value: Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

/// Decodes a payload and builds a record for every merge request in it.
///
/// # Errors
///
/// Propagates decoding failures from [`decode_merge_requests`].
pub fn normalize_payload(
    json: &str,
    provider: &Arc<dyn RemoteProvider>,
) -> Result<Vec<PullRequest>, NormalizeError> {
    let pull_requests: Vec<PullRequest> = decode_merge_requests(json)?
        .into_iter()
        .map(|raw| pull_request_from_rest(raw, provider))
        .collect();
    tracing::debug!("normalised {} GitLab merge requests", pull_requests.len());
    Ok(pull_requests)
}
