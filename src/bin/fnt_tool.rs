//! fnt-tool - Extract and repack Tony Tough 2 `.fnt` font containers.
//!
//! ```text
//! fnt-tool extract FontObj.fnt                     # -> FontObj.dds
//! fnt-tool repack FontObj.dds                      # -> FontObj.fnt, default header
//! fnt-tool repack FontObj.dds new.fnt FontObj.fnt  # reuse the original header
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tough::fnt;
use tough_cli::{banner, finish, init_logging, parse, Verbosity};

const TITLE: &str = "Font Tool - Extract & Repack .fnt files";

/// Extract and repack Tony Tough 2 .fnt font files
#[derive(Parser)]
#[command(name = "fnt-tool")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the DDS image from a .fnt file
    Extract {
        /// Font container to read
        fnt_file: PathBuf,

        /// DDS file to write (default: <fnt_file> with a .dds extension)
        output_file: Option<PathBuf>,
    },

    /// Repack a DDS image into a .fnt file
    Repack {
        /// DDS image to pack
        input_file: PathBuf,

        /// Font container to write (default: <input_file> with a .fnt extension)
        output_file: Option<PathBuf>,

        /// Existing .fnt whose FRM/TEX header should be reused
        original_fnt_file: Option<PathBuf>,
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
        Commands::Extract {
            fnt_file,
            output_file,
        } => {
            fnt::extract(&fnt_file, output_file.as_deref())
                .with_context(|| format!("Error extracting {}", fnt_file.display()))?;
        }
        Commands::Repack {
            input_file,
            output_file,
            original_fnt_file,
        } => {
            fnt::repack(
                &input_file,
                output_file.as_deref(),
                original_fnt_file.as_deref(),
            )
            .with_context(|| format!("Error repacking {}", input_file.display()))?;
        }
    }

    Ok(())
}
