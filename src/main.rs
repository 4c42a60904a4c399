use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tainty::cli::{ArgumentResolver, UsageError};
use tainty::report;

fn main() -> Result<()> {
    // The flag grammar is fixed, so verbosity comes from the environment
    // (RUST_LOG) rather than extra flags.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tainty=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let resolver = ArgumentResolver::new(installation_root());
    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    let config = match resolver.resolve(&raw_args) {
        Ok(config) => config,
        Err(err @ UsageError::Help(_)) => {
            println!("{}", err.message());
            return Ok(());
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err.message());
            eprintln!();
            eprintln!("For more information, try '{}'.", "--help".bold());
            std::process::exit(2);
        }
    };

    info!("tainty v{}", env!("CARGO_PKG_VERSION"));
    debug!("arguments accepted, analysis may proceed");

    // The analysis engine consumes the config from here on; this front end
    // only shows what was resolved.
    if config.json_output {
        println!("{}", report::render_json(&config)?);
    } else {
        report::render_terminal(&config);
    }

    Ok(())
}

/// Directory the tool is installed in, used to locate the bundled
/// vulnerability definition files.
fn installation_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
