//! @dose
//! purpose: Input resolution. Picks the text to tokenize from the inline argument, a
//!     file, or piped stdin, in that strict order, and tags the no-source case
//!     explicitly instead of conflating it with empty content.
//!
//! when-editing:
//!     - !Priority is inline text, then file, then stdin; the first present source wins
//!     - !The caller decides whether stdin is eligible (it passes None when stdin is a
//!       terminal) so this module stays free of tty probing
//!     - File and stdin contents must be valid UTF-8; read failures surface as InputError
//!
//! invariants:
//!     - Ok(None) means no source supplied input; Ok(Some("")) means a source supplied
//!       an empty string; the two are never collapsed
//!     - The input file is opened and fully read within resolve_input; no handle outlives
//!       the call
//!
//! gotchas:
//!     - A present lower-priority source is never read, so a broken file path is only an
//!       error when no inline text was given

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an input source could not be read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{}: {}", .path.display(), .source)]
    File { path: PathBuf, source: io::Error },

    #[error("<stdin>: {source}")]
    Stdin { source: io::Error },
}

/// Select the text to tokenize from the three sources.
///
/// Returns `Ok(None)` when no source supplied input; an empty string from a file or
/// from stdin is real input and comes back as `Ok(Some(String::new()))`.
pub fn resolve_input<R: Read>(
    text: Option<&str>,
    file: Option<&Path>,
    stdin: Option<R>,
) -> Result<Option<String>, InputError> {
    if let Some(text) = text {
        return Ok(Some(text.to_string()));
    }

    if let Some(path) = file {
        let content = fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Some(content));
    }

    if let Some(mut stdin) = stdin {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .map_err(|source| InputError::Stdin { source })?;
        return Ok(Some(content));
    }

    Ok(None)
}
