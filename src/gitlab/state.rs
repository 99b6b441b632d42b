//! Conversions between GitLab merge request states and canonical states.
//!
//! The mapping into the canonical model is many-to-one: `locked` merge
//! requests are reported as closed. The reverse direction therefore cannot
//! recover `locked` and always yields `closed` for a closed pull request.

use super::models::GitLabMergeRequestState;
use crate::pull_request::PullRequestState;

/// Maps a GitLab merge request state onto the canonical state.
#[must_use]
pub const fn to_canonical(state: GitLabMergeRequestState) -> PullRequestState {
    match state {
        GitLabMergeRequestState::Merged => PullRequestState::Merged,
        GitLabMergeRequestState::Closed | GitLabMergeRequestState::Locked => {
            PullRequestState::Closed
        }
        GitLabMergeRequestState::Opened => PullRequestState::Open,
    }
}

/// Maps a canonical state back onto the GitLab merge request state.
#[must_use]
pub const fn to_provider(state: PullRequestState) -> GitLabMergeRequestState {
    match state {
        PullRequestState::Merged => GitLabMergeRequestState::Merged,
        PullRequestState::Closed => GitLabMergeRequestState::Closed,
        PullRequestState::Open => GitLabMergeRequestState::Opened,
    }
}

impl From<GitLabMergeRequestState> for PullRequestState {
    fn from(value: GitLabMergeRequestState) -> Self {
        to_canonical(value)
    }
}

impl From<PullRequestState> for GitLabMergeRequestState {
    fn from(value: PullRequestState) -> Self {
        to_provider(value)
    }
}
