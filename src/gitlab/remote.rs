//! GitLab project remote used as the provider context for normalised records.

use url::Url;

use super::error::NormalizeError;
use crate::pull_request::RemoteProvider;

const GITLAB_COM: &str = "gitlab.com";

/// A GitLab project on `gitlab.com` or a self-managed instance.
///
/// # Example
///
/// ```
/// use gitlab_normalizer::gitlab::GitLabRemote;
/// use gitlab_normalizer::pull_request::RemoteProvider;
///
/// let remote = GitLabRemote::parse("git@gitlab.com:group/sub/project.git")
///     .expect("should parse SCP-style remote");
/// assert_eq!(remote.path(), "group/sub/project");
/// assert_eq!(remote.api_base().as_str(), "https://gitlab.com/api/v4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitLabRemote {
    scheme: String,
    domain: String,
    path: String,
    api_base: Url,
}

impl GitLabRemote {
    /// Parses a project URL or Git remote.
    ///
    /// Accepts `https://<host>/<group>[/<subgroup>...]/<project>`, the same
    /// with a `.git` suffix or a trailing `/-/...` route, `ssh://` remotes,
    /// and SCP-style `git@<host>:<group>/<project>.git` remotes.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidRemoteUrl`] when the input is not a
    /// URL with a host, and [`NormalizeError::MissingProjectPath`] when the
    /// path does not name at least a group and a project.
    pub fn parse(input: &str) -> Result<Self, NormalizeError> {
        let trimmed = input.trim();
        let normalised = scp_to_ssh_url(trimmed).unwrap_or_else(|| trimmed.to_owned());
        let parsed = Url::parse(&normalised)
            .map_err(|error| NormalizeError::InvalidRemoteUrl(format!("{trimmed}: {error}")))?;

        let host = parsed.host_str().ok_or_else(|| {
            NormalizeError::InvalidRemoteUrl(format!("{trimmed}: URL must include a host"))
        })?;
        let web_remote = matches!(parsed.scheme(), "http" | "https");
        // An SSH port belongs to the Git daemon, not the web and API server.
        let domain = match parsed.port().filter(|_| web_remote) {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };
        let scheme = if parsed.scheme() == "http" {
            "http"
        } else {
            "https"
        };

        let path = project_path(&parsed)?;
        let api_base = Url::parse(&format!("{scheme}://{domain}/api/v4"))
            .map_err(|error| NormalizeError::InvalidRemoteUrl(error.to_string()))?;

        Ok(Self {
            scheme: scheme.to_owned(),
            domain,
            path,
            api_base,
        })
    }

    /// Returns true for projects hosted on `gitlab.com`.
    #[must_use]
    pub fn is_gitlab_com(&self) -> bool {
        self.domain.eq_ignore_ascii_case(GITLAB_COM)
    }

    /// Web URL of the project.
    #[must_use]
    pub fn project_url(&self) -> String {
        format!("{}://{}/{}", self.scheme, self.domain, self.path)
    }

    /// Web URL of a merge request in this project.
    #[must_use]
    pub fn merge_request_url(&self, iid: u64) -> String {
        format!("{}/-/merge_requests/{iid}", self.project_url())
    }
}

impl RemoteProvider for GitLabRemote {
    fn id(&self) -> &str {
        "gitlab"
    }

    fn name(&self) -> &str {
        if self.is_gitlab_com() {
            "GitLab"
        } else {
            "GitLab Self-Managed"
        }
    }

    fn domain(&self) -> &str {
        self.domain.as_str()
    }

    fn path(&self) -> &str {
        self.path.as_str()
    }

    fn api_base(&self) -> &Url {
        &self.api_base
    }
}

/// Rewrites `user@host:path` into `ssh://user@host/path`.
fn scp_to_ssh_url(input: &str) -> Option<String> {
    if input.contains("://") {
        return None;
    }
    let (authority, path) = input.split_once(':')?;
    if !authority.contains('@') {
        return None;
    }
    Some(format!("ssh://{authority}/{}", path.trim_start_matches('/')))
}

/// Extracts `group/.../project` from the URL path.
fn project_path(parsed: &Url) -> Result<String, NormalizeError> {
    let segments: Vec<&str> = parsed
        .path_segments()
        .ok_or(NormalizeError::MissingProjectPath)?
        .take_while(|segment| *segment != "-")
        .filter(|segment| !segment.is_empty())
        .collect();

    let Some((&last, groups)) = segments.split_last() else {
        return Err(NormalizeError::MissingProjectPath);
    };
    let project = last.strip_suffix(".git").unwrap_or(last);
    if groups.is_empty() || project.is_empty() {
        return Err(NormalizeError::MissingProjectPath);
    }

    Ok(format!("{}/{project}", groups.join("/")))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::GitLabRemote;
    use crate::gitlab::error::NormalizeError;
    use crate::pull_request::RemoteProvider;

    struct ExpectedRemote {
        domain: &'static str,
        path: &'static str,
        api_base: &'static str,
    }

    #[rstest]
    #[case::https(
        "https://gitlab.com/group/project",
        ExpectedRemote { domain: "gitlab.com", path: "group/project", api_base: "https://gitlab.com/api/v4" },
    )]
    #[case::git_suffix(
        "https://gitlab.com/group/project.git",
        ExpectedRemote { domain: "gitlab.com", path: "group/project", api_base: "https://gitlab.com/api/v4" },
    )]
    #[case::subgroups(
        "https://gitlab.com/group/sub/deeper/project/",
        ExpectedRemote { domain: "gitlab.com", path: "group/sub/deeper/project", api_base: "https://gitlab.com/api/v4" },
    )]
    #[case::merge_request_route(
        "https://gitlab.com/group/project/-/merge_requests/7",
        ExpectedRemote { domain: "gitlab.com", path: "group/project", api_base: "https://gitlab.com/api/v4" },
    )]
    #[case::self_managed_with_port(
        "https://git.example.com:8443/team/app",
        ExpectedRemote { domain: "git.example.com:8443", path: "team/app", api_base: "https://git.example.com:8443/api/v4" },
    )]
    #[case::plain_http(
        "http://localhost:3000/team/app",
        ExpectedRemote { domain: "localhost:3000", path: "team/app", api_base: "http://localhost:3000/api/v4" },
    )]
    #[case::ssh_url(
        "ssh://git@gitlab.com/group/project.git",
        ExpectedRemote { domain: "gitlab.com", path: "group/project", api_base: "https://gitlab.com/api/v4" },
    )]
    #[case::scp_style(
        "git@gitlab.com:group/project.git",
        ExpectedRemote { domain: "gitlab.com", path: "group/project", api_base: "https://gitlab.com/api/v4" },
    )]
    #[case::ssh_url_with_port(
        "ssh://git@gitlab.example.com:2222/team/app.git",
        ExpectedRemote { domain: "gitlab.example.com", path: "team/app", api_base: "https://gitlab.example.com/api/v4" },
    )]
    fn parses_project_remotes(#[case] input: &str, #[case] expected: ExpectedRemote) {
        let remote = GitLabRemote::parse(input).expect("remote should parse");

        assert_eq!(remote.domain(), expected.domain, "domain mismatch");
        assert_eq!(remote.path(), expected.path, "path mismatch");
        assert_eq!(
            remote.api_base().as_str(),
            expected.api_base,
            "api base mismatch"
        );
    }

    #[rstest]
    #[case::group_only("https://gitlab.com/group")]
    #[case::root("https://gitlab.com/")]
    #[case::route_only("https://gitlab.com/-/merge_requests/1")]
    fn rejects_paths_without_project(#[case] input: &str) {
        let result = GitLabRemote::parse(input);
        assert!(
            matches!(result, Err(NormalizeError::MissingProjectPath)),
            "expected MissingProjectPath, got {result:?}"
        );
    }

    #[rstest]
    #[case::not_a_url("group/project")]
    #[case::empty("")]
    fn rejects_invalid_urls(#[case] input: &str) {
        let result = GitLabRemote::parse(input);
        assert!(
            matches!(result, Err(NormalizeError::InvalidRemoteUrl(_))),
            "expected InvalidRemoteUrl, got {result:?}"
        );
    }

    #[test]
    fn names_gitlab_com_and_self_managed_instances() {
        let hosted = GitLabRemote::parse("https://gitlab.com/g/p").expect("should parse");
        let managed = GitLabRemote::parse("https://git.example.com/g/p").expect("should parse");

        assert_eq!(hosted.id(), "gitlab");
        assert_eq!(hosted.name(), "GitLab");
        assert!(hosted.is_gitlab_com());
        assert_eq!(managed.name(), "GitLab Self-Managed");
        assert!(!managed.is_gitlab_com());
    }

    #[test]
    fn renders_merge_request_url() {
        let remote = GitLabRemote::parse("git@gitlab.com:group/project.git").expect("should parse");
        assert_eq!(
            remote.merge_request_url(42),
            "https://gitlab.com/group/project/-/merge_requests/42"
        );
    }

    #[test]
    fn ssh_port_does_not_leak_into_web_urls() {
        let remote = GitLabRemote::parse("ssh://git@gitlab.example.com:2222/team/app.git")
            .expect("should parse");
        assert_eq!(
            remote.merge_request_url(1),
            "https://gitlab.example.com/team/app/-/merge_requests/1"
        );
        assert_eq!(remote.name(), "GitLab Self-Managed");
    }
}
