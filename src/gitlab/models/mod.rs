//! Wire shapes for GitLab REST and GraphQL responses.
//!
//! REST payloads use snake_case field names while GraphQL payloads use
//! camelCase. Only [`GitLabMergeRequestRest`] feeds the record builder; the
//! remaining shapes are decoded as-is for other fetch paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merge request lifecycle state as reported by GitLab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitLabMergeRequestState {
    /// Open for review.
    Opened,
    /// Closed without merging.
    Closed,
    /// Merged into the target branch.
    Merged,
    /// Locked while GitLab processes the merge request.
    Locked,
}

impl GitLabMergeRequestState {
    /// Returns the API value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
            Self::Locked => "locked",
        }
    }
}

/// Issue lifecycle state as reported by GitLab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitLabIssueState {
    /// Open issue.
    Opened,
    /// Closed issue.
    Closed,
    /// Discussion locked.
    Locked,
}

/// User profile (GraphQL shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitLabUser {
    /// Numeric user identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Public email, when the user exposes one.
    #[serde(default)]
    pub public_email: Option<String>,
    /// Account state, e.g. `active`.
    pub state: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Profile URL.
    pub web_url: String,
}

/// Commit (REST shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitLabCommit {
    /// Full commit SHA.
    pub id: String,
    /// Abbreviated SHA.
    pub short_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Parent commit SHAs.
    pub parent_ids: Vec<String>,
    /// First line of the message.
    pub title: String,
    /// Full commit message.
    pub message: String,
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// Authoring timestamp.
    pub authored_date: DateTime<Utc>,
    /// Committer name.
    pub committer_name: String,
    /// Committer email.
    pub committer_email: String,
    /// Commit timestamp.
    pub committed_date: DateTime<Utc>,
    /// Pipeline status; only some endpoints include it.
    #[serde(default)]
    pub status: Option<String>,
    /// Owning project; only some endpoints include it.
    #[serde(default)]
    pub project_id: Option<u64>,
}

/// Author attached to GraphQL issues and merge requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitLabGraphqlAuthor {
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Profile URL.
    pub web_url: String,
}

/// Issue (GraphQL shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitLabIssue {
    /// Project-scoped issue number, as text.
    pub iid: String,
    /// Author, absent for deleted users.
    pub author: Option<GitLabGraphqlAuthor>,
    /// Title.
    pub title: String,
    /// Description body.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last update timestamp (ISO 8601).
    pub updated_at: String,
    /// Close timestamp (ISO 8601), if closed.
    #[serde(default)]
    pub closed_at: Option<String>,
    /// Web URL.
    pub web_url: String,
    /// Lifecycle state.
    pub state: GitLabIssueState,
}

/// Merge request (GraphQL shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitLabMergeRequest {
    /// Project-scoped merge request number, as text.
    pub iid: String,
    /// Author, absent for deleted users.
    pub author: Option<GitLabGraphqlAuthor>,
    /// Title.
    pub title: String,
    /// Description body.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle state.
    pub state: GitLabMergeRequestState,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last update timestamp (ISO 8601).
    pub updated_at: String,
    /// Merge timestamp (ISO 8601), if merged.
    #[serde(default)]
    pub merged_at: Option<String>,
    /// Web URL.
    pub web_url: String,
}

/// Author attached to REST merge requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitLabRestAuthor {
    /// Display name.
    pub name: String,
    /// Avatar image URL; omitted by some instances.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Profile URL.
    pub web_url: String,
}

/// Merge request (REST shape), input to the record builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitLabMergeRequestRest {
    /// Instance-wide identifier.
    pub id: u64,
    /// Project-scoped merge request number.
    pub iid: u64,
    /// Author, `null` for deleted users.
    pub author: Option<GitLabRestAuthor>,
    /// Title.
    pub title: String,
    /// Description body.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle state.
    pub state: GitLabMergeRequestState,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last update timestamp (ISO 8601).
    pub updated_at: String,
    /// Close timestamp (ISO 8601), `null` unless closed.
    #[serde(default)]
    pub closed_at: Option<String>,
    /// Merge timestamp (ISO 8601), `null` unless merged.
    #[serde(default)]
    pub merged_at: Option<String>,
    /// Web URL.
    pub web_url: String,
}
