use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, UsageError};
use crate::config::{ParsedConfig, PrintMode};

/// Turns raw invocation tokens into a validated [`ParsedConfig`].
///
/// The built-in default file paths are supplied at construction time so that
/// tests (and embedders) can inject their own instead of relying on where
/// the binary happens to be installed.
pub struct ArgumentResolver {
    /// Default blackbox mapping definitions file.
    blackbox_mapping_file: PathBuf,
    /// Default sources-and-sinks trigger word file.
    trigger_word_file: PathBuf,
}

impl ArgumentResolver {
    /// Build a resolver with defaults derived from the installation root.
    pub fn new(install_root: impl AsRef<Path>) -> Self {
        let definitions = install_root.as_ref().join("vulnerability_definitions");
        Self {
            blackbox_mapping_file: definitions.join("blackbox_mapping.json"),
            trigger_word_file: definitions.join("all_trigger_words.txt"),
        }
    }

    /// Build a resolver with both default files injected directly.
    pub fn with_default_files(
        blackbox_mapping_file: impl Into<PathBuf>,
        trigger_word_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            blackbox_mapping_file: blackbox_mapping_file.into(),
            trigger_word_file: trigger_word_file.into(),
        }
    }

    /// Resolve raw tokens (program name excluded) into a configuration.
    ///
    /// An empty token list is treated as a help request, so the caller gets
    /// the full usage text back rather than a validation message. Errors
    /// are terminal: no partial configuration is ever returned.
    pub fn resolve<I, S>(&self, raw: I) -> Result<ParsedConfig, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = raw
            .into_iter()
            .map(|t| normalize_token(t.as_ref()))
            .collect();
        if tokens.is_empty() {
            tokens.push("-h".to_string());
        }

        let cli = Cli::try_parse_from(std::iter::once("tainty".to_string()).chain(tokens))
            .map_err(|err| match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    UsageError::Help(err.render().to_string())
                }
                _ => UsageError::Invalid(clap_message(&err)),
            })?;

        self.validate(cli)
    }

    /// Cross-field rules over an already tokenized invocation.
    fn validate(&self, cli: Cli) -> Result<ParsedConfig, UsageError> {
        if cli.filepath.is_none() && cli.git_repos.is_none() {
            return Err(UsageError::Invalid(
                "one of the arguments -f/--filepath -gr/--git-repos is required".to_string(),
            ));
        }
        if cli.filepath.is_some() && cli.git_repos.is_some() {
            return Err(UsageError::Invalid(
                "argument -f/--filepath: not allowed with argument -gr/--git-repos".to_string(),
            ));
        }

        // The trim mode is the default, so only an explicit request for both
        // modes is a conflict; `-i` on its own overrides the default.
        let print_mode = match (cli.trim_reassigned_in, cli.interactive) {
            (true, true) => {
                return Err(UsageError::Invalid(
                    "argument -i/--interactive: not allowed with argument \
                     -trim/--trim-reassigned-in"
                        .to_string(),
                ))
            }
            (_, true) => PrintMode::Interactive,
            _ => PrintMode::TrimReassigned,
        };

        let config = ParsedConfig {
            filepath: cli.filepath,
            git_repos: cli.git_repos,
            root_directory: cli.root_directory,
            adaptor: cli.adaptor,
            baseline: cli.baseline,
            json_output: cli.json,
            blackbox_mapping_file: cli
                .blackbox_mapping_file
                .unwrap_or_else(|| self.blackbox_mapping_file.clone()),
            trigger_word_file: cli
                .trigger_word_file
                .unwrap_or_else(|| self.trigger_word_file.clone()),
            print_mode,
        };
        debug!("resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// First line of a clap error, without the `error: ` prefix or the usage
/// block; the caller decides how to decorate it.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.split("\n\n").next().unwrap_or(&rendered);
    first
        .strip_prefix("error: ")
        .unwrap_or(first)
        .trim_end()
        .to_string()
}

/// Rewrite the two multi-character short aliases into their long forms.
///
/// clap only supports single-character shorts, but the accepted grammar
/// includes `-gr` and `-trim`. Without this rewrite clap would read `-trim`
/// as `-t rim`.
fn normalize_token(token: &str) -> String {
    match token {
        "-gr" => "--git-repos".to_string(),
        "-trim" => "--trim-reassigned-in".to_string(),
        _ => {
            if let Some(value) = token.strip_prefix("-gr=") {
                format!("--git-repos={value}")
            } else {
                token.to_string()
            }
        }
    }
}
