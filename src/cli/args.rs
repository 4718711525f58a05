//! @dose
//! purpose: This module defines the command-line interface for mokujin using the clap derive
//!     macros. Cli is the whole command table; it is built once in main and handed to the
//!     dispatcher.
//!
//! when-editing:
//!     - !Each subcommand must be added to the Commands enum
//!     - !Global flags (author, verbose) are defined on Cli and propagate to all subcommands
//!
//! invariants:
//!     - The subcommand is optional; with none, the root help is printed
//!     - --author is stored only, nothing reads it yet
//!
//! gotchas:
//!     - --toggle is a root-only flag, `mokujin generate -t` is a usage error

use clap::{Args, Parser, Subcommand};

/// Author recorded when --author is not given
pub const DEFAULT_AUTHOR: &str = "Steven YAMBOS";

#[derive(Parser)]
#[command(name = "mokujin")]
#[command(author)]
#[command(about = "Generate your technical documentation in the blink of an eye")]
#[command(long_about = "Mokujin is a small, lightweight command-line tool that generates a \
'documentation' directory pre-filled with Markdown templates. It is meant for developers, \
technical writers and teams who want to structure a project's documentation quickly.

The generated 'documentation' directory contains the following templates:
  - README.md
  - Base de données.md
  - Organisation du dépôt.md")]
pub struct Cli {
    /// Author of the generated documentation
    #[arg(short, long, global = true, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Toggle flag (reserved)
    #[arg(short, long)]
    pub toggle: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the 'documentation' directory
    #[command(
        long_about = "Creates a 'documentation' directory in the current directory and copies \
every available documentation template into it."
    )]
    Generate(GenerateArgs),

    /// Print the current version of the tool
    Version,
}

#[derive(Args, Default)]
pub struct GenerateArgs {}
