pub mod error;
pub mod resolver;

use clap::Parser;

pub use error::UsageError;
pub use resolver::ArgumentResolver;

/// Tainty — taint-analysis security scanner
///
/// The raw flag grammar. Parsing alone is not enough to accept an
/// invocation: the cross-field rules (exactly one entry point, one print
/// mode) live in [`ArgumentResolver`], which is the only way callers should
/// turn tokens into a configuration.
#[derive(Parser, Debug)]
#[command(
    name = "tainty",
    version,
    about = "Find taint-style vulnerabilities in web application code"
)]
pub struct Cli {
    /// Path to the file that should be analysed
    #[arg(short = 'f', long, value_name = "FILEPATH")]
    pub filepath: Option<String>,

    /// URL(s) of git repositories holding the code to analyse
    #[arg(long, value_name = "GIT_REPOS")]
    pub git_repos: Option<String>,

    /// Project root, important when the entry file is not at the root of the project
    #[arg(short = 'r', long, value_name = "DIR_TO_ANALYZE")]
    pub root_directory: Option<String>,

    /// Web framework adaptor: Flask (default), Django, Every or Pylons
    #[arg(short = 'a', long, value_name = "ADAPTOR")]
    pub adaptor: Option<String>,

    /// Baseline report to compare against (only JSON-formatted files are accepted)
    #[arg(short = 'b', long, value_name = "BASELINE_JSON_FILE")]
    pub baseline: Option<String>,

    /// Print JSON instead of a report
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Input blackbox mapping file
    #[arg(short = 'm', long, value_name = "FILE")]
    pub blackbox_mapping_file: Option<std::path::PathBuf>,

    /// Input file with a list of sources and sinks
    #[arg(short = 't', long, value_name = "FILE")]
    pub trigger_word_file: Option<std::path::PathBuf>,

    /// Trim the reassigned list to the vulnerability chain
    #[arg(long)]
    pub trim_reassigned_in: bool,

    /// Ask about each vulnerability chain and blackbox node
    #[arg(short = 'i', long)]
    pub interactive: bool,
}
