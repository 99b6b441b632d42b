//! Tests for field resolution methods (`require_input`, `resolve_remote_url`).

use camino::Utf8PathBuf;
use rstest::rstest;

use crate::config::{CI_PROJECT_URL, InputSource};
use crate::{NormalizeError, NormalizerConfig};

#[rstest]
#[case::dash("-", InputSource::Stdin)]
#[case::padded_dash(" - ", InputSource::Stdin)]
#[case::file("payloads/mr.json", InputSource::File(Utf8PathBuf::from("payloads/mr.json")))]
fn require_input_resolves_source(#[case] input: &str, #[case] expected: InputSource) {
    let config = NormalizerConfig {
        input: Some(input.to_owned()),
        ..Default::default()
    };

    assert_eq!(config.require_input().ok(), Some(expected));
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some("   "))]
fn require_input_returns_error_when_missing(#[case] input: Option<&str>) {
    let config = NormalizerConfig {
        input: input.map(str::to_owned),
        ..Default::default()
    };

    assert_eq!(config.require_input(), Err(NormalizeError::MissingInput));
}

#[rstest]
fn resolve_remote_url_prefers_configured_value() {
    let _guard = env_lock::lock_env([(CI_PROJECT_URL, Some("https://gitlab.com/ci/project"))]);
    let config = NormalizerConfig {
        remote_url: Some("https://gitlab.com/group/project".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_remote_url().ok().as_deref(),
        Some("https://gitlab.com/group/project"),
        "configured remote should win over CI_PROJECT_URL"
    );
}

#[rstest]
fn resolve_remote_url_falls_back_to_ci_project_url() {
    let _guard = env_lock::lock_env([(CI_PROJECT_URL, Some("https://gitlab.com/ci/project"))]);
    let config = NormalizerConfig::default();

    assert_eq!(
        config.resolve_remote_url().ok().as_deref(),
        Some("https://gitlab.com/ci/project")
    );
}

#[rstest]
fn resolve_remote_url_returns_error_when_none() {
    let _guard = env_lock::lock_env([(CI_PROJECT_URL, None::<&str>)]);
    let config = NormalizerConfig::default();

    assert_eq!(
        config.resolve_remote_url(),
        Err(NormalizeError::MissingRemoteUrl)
    );
}
