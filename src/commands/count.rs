//! @dose
//! purpose: This module implements the count flow: resolve the input text, resolve the
//!     encoding, encode, and print the token count as a bare integer on stdout.
//!
//! when-editing:
//!     - !The flow is strictly linear: input, no-input precondition, encoding, count
//!     - !CountError's Display strings are the exact stderr lines; main prints them
//!       verbatim and exits 1
//!     - Selector precedence for the encoding is -m, then -e, then config, then the
//!       built-in default
//!
//! invariants:
//!     - stdout carries nothing but the count; diagnostics and --verbose chatter go to
//!       stderr
//!     - Empty input from a file or stdin is counted (0), not treated as missing
//!
//! do-not:
//!     - Never read stdin when it is an interactive terminal; show usage instead of
//!       blocking on keyboard input
//!
//! flows:
//!     - Read: pick inline text, file, or piped stdin, in that order
//!     - Resolve: turn the selector into a loaded encoding
//!     - Count: length of the encoded id sequence
//!     - Print: the integer alone on one line

use crate::cli::Cli;
use crate::config::Config;
use crate::encoding::{Encoding, ResolveError};
use crate::input::{resolve_input, InputError};
use clap::CommandFactory;
use std::io::{self, IsTerminal, Read};
use thiserror::Error;

/// A failed count run. The Display string is the complete diagnostic line.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("Error reading file: {0}")]
    Input(#[from] InputError),

    #[error("Error: {0}")]
    Resolve(#[from] ResolveError),

    /// No source supplied input; usage has already been printed.
    #[error("no input provided")]
    NoInput,
}

/// Count tokens per the parsed invocation and print the result.
pub fn run_count(cli: &Cli, config: &Config) -> Result<(), CountError> {
    let stdin = io::stdin();
    let piped = !stdin.is_terminal();
    run_count_with(cli, config, piped.then(|| stdin.lock()))
}

fn run_count_with<R: Read>(
    cli: &Cli,
    config: &Config,
    stdin: Option<R>,
) -> Result<(), CountError> {
    let input = resolve_input(cli.text.as_deref(), cli.file.as_deref(), stdin)?;

    let Some(text) = input else {
        // Nothing inline, no file, stdin is a terminal: show usage instead of a count.
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        return Err(CountError::NoInput);
    };

    let encoding = match (cli.model.as_deref(), cli.encoding.as_deref()) {
        (Some(model), _) => Encoding::for_model(model)?,
        (None, Some(name)) => Encoding::for_name(name)?,
        (None, None) => Encoding::for_name(config.default_encoding())?,
    };

    if cli.verbose {
        eprintln!(
            "counting {} bytes with encoding {}",
            text.len(),
            encoding.name()
        );
    }

    println!("{}", encoding.count(&text));
    Ok(())
}
