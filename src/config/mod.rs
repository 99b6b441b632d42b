//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach. From lowest to
//! highest precedence:
//!
//! 1. **Defaults** – built-in defaults
//! 2. **Configuration file** – `.gitlab-normalizer.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `GITLAB_NORMALIZER_INPUT`,
//!    `GITLAB_NORMALIZER_REMOTE_URL`
//! 4. **Command-line arguments** – `--input`/`-i`, `--remote-url`/`-r`,
//!    `--json`/`-j`
//!
//! # Configuration File
//!
//! ```toml
//! input = "merge_requests.json"
//! remote_url = "https://gitlab.com/group/project"
//! json = true
//! ```

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::gitlab::error::NormalizeError;

/// Environment variable GitLab CI sets to the project's web URL.
pub const CI_PROJECT_URL: &str = "CI_PROJECT_URL";

/// Where the raw merge request payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with `-`.
    Stdin,
    /// A JSON file on disk.
    File(Utf8PathBuf),
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use gitlab_normalizer::NormalizerConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = NormalizerConfig::load().expect("failed to load configuration");
/// let input = config.require_input().expect("input required");
/// let remote_url = config.resolve_remote_url().expect("remote URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITLAB_NORMALIZER",
    discovery(
        dotfile_name = ".gitlab-normalizer.toml",
        config_file_name = "gitlab-normalizer.toml",
        app_name = "gitlab-normalizer"
    )
)]
pub struct NormalizerConfig {
    /// Path to a JSON merge request payload, or `-` for standard input.
    ///
    /// Can be provided via:
    /// - CLI: `--input <PATH>` or `-i <PATH>`
    /// - Environment: `GITLAB_NORMALIZER_INPUT`
    /// - Config file: `input = "..."`
    #[ortho_config(cli_short = 'i')]
    pub input: Option<String>,

    /// GitLab project URL identifying the provider context.
    ///
    /// Can be provided via:
    /// - CLI: `--remote-url <URL>` or `-r <URL>`
    /// - Environment: `GITLAB_NORMALIZER_REMOTE_URL`, or `CI_PROJECT_URL`
    ///   inside GitLab CI
    /// - Config file: `remote_url = "..."`
    #[ortho_config(cli_short = 'r')]
    pub remote_url: Option<String>,

    /// Emits normalised records as a JSON array instead of text lines.
    ///
    /// Can be provided via:
    /// - CLI: `--json` / `-j`
    /// - Config file: `json = true`
    #[ortho_config(cli_short = 'j')]
    pub json: bool,
}

impl NormalizerConfig {
    /// Returns the configured payload source.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MissingInput`] when no input is configured
    /// or the value is blank.
    pub fn require_input(&self) -> Result<InputSource, NormalizeError> {
        let value = self
            .input
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(NormalizeError::MissingInput)?;

        if value == "-" {
            Ok(InputSource::Stdin)
        } else {
            Ok(InputSource::File(Utf8PathBuf::from(value)))
        }
    }

    /// Resolves the GitLab project URL from configuration, falling back to
    /// the `CI_PROJECT_URL` variable that GitLab CI jobs receive.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MissingRemoteUrl`] when no source provides
    /// a value.
    pub fn resolve_remote_url(&self) -> Result<String, NormalizeError> {
        self.remote_url
            .clone()
            .or_else(|| env::var(CI_PROJECT_URL).ok())
            .ok_or(NormalizeError::MissingRemoteUrl)
    }
}

#[cfg(test)]
mod tests;
