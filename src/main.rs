//! Command-line entrypoint that normalises GitLab merge request payloads.

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use gitlab_normalizer::config::InputSource;
use gitlab_normalizer::output::{render_json, render_text};
use gitlab_normalizer::{
    GitLabRemote, NormalizeError, NormalizerConfig, RemoteProvider, normalize_payload,
};
use ortho_config::OrthoConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), NormalizeError> {
    let config = load_config()?;

    let input = config.require_input()?;
    let remote_url = config.resolve_remote_url()?;
    let provider: Arc<dyn RemoteProvider> = Arc::new(GitLabRemote::parse(&remote_url)?);

    let payload = read_payload(&input)?;
    let pull_requests = normalize_payload(&payload, &provider)?;

    let rendered = if config.json {
        render_json(&pull_requests)?
    } else {
        render_text(&pull_requests)
    };

    writeln!(io::stdout().lock(), "{rendered}").map_err(|error| NormalizeError::Io {
        message: error.to_string(),
    })
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`NormalizeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<NormalizerConfig, NormalizeError> {
    NormalizerConfig::load().map_err(|error| NormalizeError::Configuration {
        message: error.to_string(),
    })
}

fn read_payload(input: &InputSource) -> Result<String, NormalizeError> {
    let result = match input {
        InputSource::Stdin => io::read_to_string(io::stdin().lock()),
        InputSource::File(path) => fs::read_to_string(path),
    };
    result.map_err(|error| {
        let source = match input {
            InputSource::Stdin => "standard input",
            InputSource::File(path) => path.as_str(),
        };
        NormalizeError::Io {
            message: format!("failed to read {source}: {error}"),
        }
    })
}
