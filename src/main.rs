//! @dose
//! purpose: This is the CLI entry point for toklen. It parses command-line arguments using
//!     clap, handles the informational flags (--version, --list-encodings), loads the
//!     optional config file, and dispatches to the count command.
//!
//! when-editing:
//!     - !Informational flags short-circuit before any input is read
//!     - !CountError Display already carries the full stderr line; print it verbatim
//!     - The no-input case prints help inside the command, so main stays silent for it
//!
//! invariants:
//!     - The process exits with 0 on success, 1 on any runtime error
//!     - Argument parse errors exit with clap's own code before main logic runs
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules
//!     - Never panic - always use proper error handling
//!
//! gotchas:
//!     - --version is a plain flag rather than clap's builtin so it can print
//!       "name version" in exactly that form

use clap::Parser;
use std::path::Path;
use toklen::cli::Cli;
use toklen::commands::{run_count, run_list, CountError};
use toklen::config::Config;

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }

    if cli.list_encodings {
        run_list();
        return;
    }

    let config = Config::load(Path::new("."));

    if let Err(e) = run_count(&cli, &config) {
        if !matches!(e, CountError::NoInput) {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
