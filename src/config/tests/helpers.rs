//! Builds [`NormalizerConfig`] values from explicit configuration sources.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::NormalizerConfig;

/// Configuration source, listed from lowest to highest precedence.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `sources` in the order given, as the CLI loader would.
pub fn compose(sources: &[(Source, Value)]) -> NormalizerConfig {
    let composer = sources.iter().cloned().fold(
        MergeComposer::new(),
        |mut composer, (source, value)| {
            match source {
                Source::Defaults => composer.push_defaults(value),
                Source::File => composer.push_file(value, None),
                Source::Environment => composer.push_environment(value),
                Source::Cli => composer.push_cli(value),
            }
            composer
        },
    );

    NormalizerConfig::merge_from_layers(composer.layers())
        .expect("configuration sources should merge")
}
