//! GitLab response normalisation.
//!
//! This module decodes GitLab REST and GraphQL payloads into typed wire
//! shapes, maps merge request states onto the canonical pull request states,
//! and builds canonical [`PullRequest`](crate::pull_request::PullRequest)
//! records tied to a [`GitLabRemote`] provider context.

pub mod error;
pub mod models;
pub mod normalize;
pub mod remote;
pub mod state;

pub use error::NormalizeError;
pub use models::{
    GitLabCommit, GitLabGraphqlAuthor, GitLabIssue, GitLabIssueState, GitLabMergeRequest,
    GitLabMergeRequestRest, GitLabMergeRequestState, GitLabRestAuthor, GitLabUser,
};
pub use normalize::{
    decode_merge_request, decode_merge_requests, normalize_payload, parse_instant,
    pull_request_from_rest,
};
pub use remote::GitLabRemote;
pub use state::{to_canonical, to_provider};
