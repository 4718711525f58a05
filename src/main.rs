//! @dose
//! purpose: This is the CLI entry point for mokujin. It parses command-line arguments using
//!     clap and dispatches to the generate or version handler.
//!
//! when-editing:
//!     - !All command handlers are imported from the mokujin crate
//!     - Error messages are printed to stderr with a ❌ marker and exit with code 1
//!
//! invariants:
//!     - The command table (Cli) is built exactly once, here
//!     - The process exits with 0 on success, 1 on any command error
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules
//!     - Never panic - always use proper error handling

use clap::{CommandFactory, Parser};
use mokujin::cli::{Cli, Commands};
use mokujin::commands::{run_generate, run_version};
use mokujin::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(&args),
        Some(Commands::Version) => {
            run_version();
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
