//! Provider-agnostic pull request model.
//!
//! Records in this module are produced by provider-specific normalisers (see
//! [`crate::gitlab`]) and consumed by rendering or storage layers that should
//! not care which code-hosting service a pull request came from.

use std::fmt;
use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod provider;

pub use provider::RemoteProvider;

#[cfg(test)]
pub use provider::MockRemoteProvider;

/// Lifecycle state of a pull request, independent of provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    /// Open for review.
    Open,
    /// Closed without merging.
    Closed,
    /// Merged into the target branch.
    Merged,
}

impl PullRequestState {
    /// Returns the lowercase display name of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Merged => "merged",
        }
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author attribution for a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestAuthor {
    /// Display name.
    pub name: String,
    /// Avatar image URL, empty when unknown.
    pub avatar_url: String,
    /// Profile URL, empty when unknown.
    pub url: String,
}

/// Canonical pull request record.
///
/// Fields are read through accessors; a record is never modified once a
/// normaliser has built it.
#[derive(Clone)]
pub struct PullRequest {
    pub(crate) provider: Weak<dyn RemoteProvider>,
    pub(crate) author: PullRequestAuthor,
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) state: PullRequestState,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) closed_at: Option<DateTime<Utc>>,
    pub(crate) merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Provider the record came from, if it is still alive.
    #[must_use]
    pub fn provider(&self) -> Option<Arc<dyn RemoteProvider>> {
        self.provider.upgrade()
    }

    /// Whether this record belongs to `provider`.
    #[must_use]
    pub fn belongs_to(&self, provider: &Arc<dyn RemoteProvider>) -> bool {
        Weak::ptr_eq(&self.provider, &Arc::downgrade(provider))
    }

    /// Author attribution.
    #[must_use]
    pub const fn author(&self) -> &PullRequestAuthor {
        &self.author
    }

    /// Provider-scoped identifier rendered as text.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Title of the pull request.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Web URL for displaying to a user.
    #[must_use]
    pub const fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PullRequestState {
        self.state
    }

    /// Last update instant.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Instant the pull request was closed, if it has been.
    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Instant the pull request was merged, if it has been.
    #[must_use]
    pub const fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }

    /// Serialisable view of the record for output layers.
    #[must_use]
    pub fn summary(&self) -> PullRequestSummary {
        PullRequestSummary {
            provider: self.provider().map(|provider| provider.id().to_owned()),
            id: self.id.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            state: self.state,
            author: self.author.clone(),
            updated_at: self.updated_at,
            closed_at: self.closed_at,
            merged_at: self.merged_at,
        }
    }
}

impl fmt::Debug for PullRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let provider = self.provider();
        f.debug_struct("PullRequest")
            .field("provider", &provider.as_ref().map(|value| value.id()))
            .field("author", &self.author)
            .field("id", &self.id)
            .field("title", &self.title)
            .field("url", &self.url)
            .field("state", &self.state)
            .field("updated_at", &self.updated_at)
            .field("closed_at", &self.closed_at)
            .field("merged_at", &self.merged_at)
            .finish()
    }
}

impl PartialEq for PullRequest {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.provider, &other.provider)
            && self.author == other.author
            && self.id == other.id
            && self.title == other.title
            && self.url == other.url
            && self.state == other.state
            && self.updated_at == other.updated_at
            && self.closed_at == other.closed_at
            && self.merged_at == other.merged_at
    }
}

impl Eq for PullRequest {}

/// Owned, serialisable projection of a [`PullRequest`].
///
/// The provider is reduced to its identifier, or `None` when the provider has
/// already been dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestSummary {
    /// Identifier of the originating provider.
    pub provider: Option<String>,
    /// Provider-scoped identifier.
    pub id: String,
    /// Title of the pull request.
    pub title: String,
    /// Web URL.
    pub url: String,
    /// Lifecycle state.
    pub state: PullRequestState,
    /// Author attribution.
    pub author: PullRequestAuthor,
    /// Last update instant.
    pub updated_at: DateTime<Utc>,
    /// Close instant.
    pub closed_at: Option<DateTime<Utc>>,
    /// Merge instant.
    pub merged_at: Option<DateTime<Utc>>,
}
