//! @dose
//! purpose: This module defines the command-line interface for toklen using the clap
//!     derive macros. One flat invocation, no subcommands: a positional text argument,
//!     the input and encoding selectors, and the short-circuit flags.
//!
//! when-editing:
//!     - !-e and -m are mutually exclusive; clap rejects the pair at parse time with its
//!       own usage-error exit code, before any domain logic runs
//!     - !-e carries no clap default; the o200k_base fallback is applied at resolution
//!       time so config can sit between "explicit flag" and "built-in default"
//!     - clap's automatic version flag is disabled because this tool owns -v
//!
//! invariants:
//!     - The Cli struct is the root parser that clap uses to parse command-line arguments
//!     - PathBuf is used for the file argument to ensure proper path handling
//!
//! do-not:
//!     - Never give --verbose a short flag; -v is taken by version
//!
//! gotchas:
//!     - version and list_encodings are plain flags here; main checks them before doing
//!       any work, so they behave as immediate exits

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  toklen \"Hello, world!\"
  toklen -f document.txt
  echo \"Hello, world!\" | toklen
  toklen -e cl100k_base \"Hello, world!\"
  toklen -m gpt-4o \"Hello, world!\"
";

#[derive(Parser, Debug)]
#[command(name = "toklen")]
#[command(author, version, about = "Count LLM tokens in text using tiktoken encodings")]
#[command(disable_version_flag = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Text to tokenize (can also be provided via stdin or -f)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Encoding to use (default: o200k_base); see --list-encodings
    #[arg(short, long, value_name = "NAME", conflicts_with = "model")]
    pub encoding: Option<String>,

    /// Model name to determine the encoding (e.g. gpt-4o, gpt-3.5-turbo)
    #[arg(short, long, value_name = "NAME")]
    pub model: Option<String>,

    /// List available encodings and exit
    #[arg(long)]
    pub list_encodings: bool,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Report the resolved encoding on stderr
    #[arg(long)]
    pub verbose: bool,
}
