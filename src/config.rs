use std::path::PathBuf;

use serde::Serialize;

/// How findings are presented once analysis completes.
///
/// The two modes are mutually exclusive, so they are one tagged choice with
/// a single default rather than two independent booleans. Resolution only
/// has to reject invocations where the user explicitly asked for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrintMode {
    /// Trim the reassigned list down to the vulnerability chain.
    #[default]
    TrimReassigned,
    /// Ask about each vulnerability chain and blackbox node.
    Interactive,
}

/// The validated configuration for one invocation.
///
/// Instances only exist once every cross-field rule has passed; after
/// construction the record is immutable for the rest of the run.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedConfig {
    /// Entry file to analyse. Exactly one of this and `git_repos` is set.
    pub filepath: Option<String>,

    /// Git repository URL(s) to analyse instead of a local file.
    pub git_repos: Option<String>,

    /// Project root when the entry file is not at the root of the project.
    pub root_directory: Option<String>,

    /// Web framework adaptor name; `None` means Flask. Accepted as a free
    /// string, not validated against the known adaptor set here.
    pub adaptor: Option<String>,

    /// Path to a JSON baseline report. Existence is not checked here.
    pub baseline: Option<String>,

    /// Emit JSON instead of the terminal report.
    pub json_output: bool,

    /// Blackbox mapping definitions file.
    pub blackbox_mapping_file: PathBuf,

    /// Sources-and-sinks trigger word definitions file.
    pub trigger_word_file: PathBuf,

    /// Presentation mode for vulnerability chains.
    pub print_mode: PrintMode,
}

impl ParsedConfig {
    /// Boolean view of the print mode, kept for callers that still think in
    /// terms of the `-trim` flag.
    pub fn trim_reassigned_in(&self) -> bool {
        self.print_mode == PrintMode::TrimReassigned
    }

    /// Boolean view of the print mode for the `-i` flag.
    pub fn interactive(&self) -> bool {
        self.print_mode == PrintMode::Interactive
    }

    /// The effective adaptor name, falling back to the Flask default.
    pub fn adaptor_name(&self) -> &str {
        self.adaptor.as_deref().unwrap_or("Flask")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_mode_defaults_to_trim() {
        assert_eq!(PrintMode::default(), PrintMode::TrimReassigned);
    }

    #[test]
    fn boolean_views_match_the_mode() {
        let config = ParsedConfig {
            filepath: Some("app.py".into()),
            git_repos: None,
            root_directory: None,
            adaptor: None,
            baseline: None,
            json_output: false,
            blackbox_mapping_file: PathBuf::from("blackbox_mapping.json"),
            trigger_word_file: PathBuf::from("all_trigger_words.txt"),
            print_mode: PrintMode::Interactive,
        };
        assert!(config.interactive());
        assert!(!config.trim_reassigned_in());
        assert_eq!(config.adaptor_name(), "Flask");
    }
}
