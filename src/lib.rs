//! @dose
//! purpose: This is the library crate root for toklen, exposing the public API for use as
//!     both a CLI tool and a library. It re-exports key types and functions from all
//!     modules for convenient access by consumers.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - !Re-exports should include commonly used types and functions
//!     - Keep the re-export list organized by module
//!
//! invariants:
//!     - The public API surface is stable - all re-exported items are public contract
//!     - Every registered encoding is reachable through Encoding::for_name
//!
//! do-not:
//!     - Never remove a re-export without major version bump (breaking change)
//!     - Never expose internal implementation details
//!
//! gotchas:
//!     - The lib.rs is separate from main.rs - library consumers get lib, CLI gets main
//!     - Error types are exported so callers can match on failure kinds

pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod input;

// Re-export main types for convenience
pub use cli::Cli;
pub use commands::{run_count, run_list, CountError};
pub use config::Config;
pub use encoding::{encoding_names, Encoding, ResolveError, DEFAULT_ENCODING};
pub use input::{resolve_input, InputError};
