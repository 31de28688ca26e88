//! Shared plumbing for the `fnt-tool` and `text-tool` binaries.
//!
//! Both tools print a banner, parse their arguments, install a stdout
//! logger and map the outcome of a single operation to an exit code.

use std::process::ExitCode;

use clap::{Args, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Width of the `=` rules around the banner title.
const RULE_WIDTH: usize = 50;

/// Logging verbosity flags shared by both tools.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Verbosity {
    /// Level explicitly requested on the command line, if any.
    pub fn level(&self) -> Option<LevelFilter> {
        match (self.verbose, self.quiet) {
            (true, _) => Some(LevelFilter::DEBUG),
            (_, true) => Some(LevelFilter::WARN),
            _ => None,
        }
    }
}

/// The fixed banner printed before anything else.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n  {title}\n{rule}\n")
}

/// Parse arguments, printing usage on failure.
///
/// `--help` and `--version` yield a success code; every other parse error a
/// failure code.
pub fn parse<C: Parser>() -> Result<C, ExitCode> {
    C::try_parse().map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Install the stdout logger.
///
/// `RUST_LOG` is honoured unless `-v` or `-q` was given.
pub fn init_logging(verbosity: Verbosity) {
    let filter = match verbosity.level() {
        Some(level) => EnvFilter::default().add_directive(level.into()),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Report the outcome of an operation and turn it into an exit code.
pub fn finish<T>(result: anyhow::Result<T>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
