//! Normalises GitLab API responses into a provider-agnostic pull request
//! model.
//!
//! The library decodes GitLab merge request payloads, maps GitLab's merge
//! request states onto canonical pull request states, and builds canonical
//! records that keep a weak back-reference to the GitLab project they came
//! from.

pub mod config;
pub mod gitlab;
pub mod output;
pub mod pull_request;

pub use config::{InputSource, NormalizerConfig};
pub use gitlab::{
    GitLabMergeRequestRest, GitLabMergeRequestState, GitLabRemote, NormalizeError,
    normalize_payload, pull_request_from_rest,
};
pub use pull_request::{
    PullRequest, PullRequestAuthor, PullRequestState, PullRequestSummary, RemoteProvider,
};
