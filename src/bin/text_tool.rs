//! text-tool - Extract and repack Tony Tough 2 `translation.dat` archives.
//!
//! ```text
//! text-tool extract                                # translation.dat -> translation.txt
//! text-tool repack                                 # translation.txt -> translation.dat
//! text-tool extract patch.dat patch.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tough::translation::{self, DEFAULT_ARCHIVE, DEFAULT_TEXT};
use tough_cli::{banner, finish, init_logging, parse, Verbosity};

const TITLE: &str = "Translation Tool - Extract & Repack";

/// Extract and repack Tony Tough 2 translation.dat files
#[derive(Parser)]
#[command(name = "text-tool")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the translation text from a .dat archive
    Extract {
        /// Archive to read
        #[arg(default_value = DEFAULT_ARCHIVE)]
        dat_file: PathBuf,

        /// Text file to write
        #[arg(default_value = DEFAULT_TEXT)]
        txt_file: PathBuf,
    },

    /// Pack a text file into a new .dat archive
    Repack {
        /// Text file to read
        #[arg(default_value = DEFAULT_TEXT)]
        txt_file: PathBuf,

        /// Archive to write
        #[arg(default_value = DEFAULT_ARCHIVE)]
        dat_file: PathBuf,
    },
}

fn main() -> ExitCode {
    println!("{}", banner(TITLE));

    let cli = match parse::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    init_logging(cli.verbosity);
    finish(run(cli.command))
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Extract { dat_file, txt_file } => {
            translation::extract(&dat_file, &txt_file)
                .with_context(|| format!("Error extracting {}", dat_file.display()))?;
        }
        Commands::Repack { txt_file, dat_file } => {
            translation::repack(&txt_file, &dat_file)
                .with_context(|| format!("Error repacking {}", txt_file.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["text-tool", "extract"]).unwrap();
        match cli.command {
            Commands::Extract { dat_file, txt_file } => {
                assert_eq!(dat_file, PathBuf::from("translation.dat"));
                assert_eq!(txt_file, PathBuf::from("translation.txt"));
            }
            Commands::Repack { .. } => panic!("expected extract"),
        }

        let cli = Cli::try_parse_from(["text-tool", "repack"]).unwrap();
        match cli.command {
            Commands::Repack { txt_file, dat_file } => {
                assert_eq!(txt_file, PathBuf::from("translation.txt"));
                assert_eq!(dat_file, PathBuf::from("translation.dat"));
            }
            Commands::Extract { .. } => panic!("expected repack"),
        }
    }

    #[test]
    fn test_explicit_paths() {
        let cli = Cli::try_parse_from(["text-tool", "-q", "repack", "it.txt"]).unwrap();

        assert!(cli.verbosity.quiet);
        match cli.command {
            Commands::Repack { txt_file, dat_file } => {
                assert_eq!(txt_file, PathBuf::from("it.txt"));
                assert_eq!(dat_file, PathBuf::from("translation.dat"));
            }
            Commands::Extract { .. } => panic!("expected repack"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["text-tool", "-v", "-q", "extract"]).is_err());
    }
}
