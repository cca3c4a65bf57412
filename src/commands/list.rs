//! @dose
//! purpose: This module implements the --list-encodings command that prints every
//!     registered encoding name so users can discover valid values for -e.
//!
//! when-editing:
//!     - !Output format is part of the CLI contract; scripts parse the indented names
//!
//! invariants:
//!     - First line is always "Available encodings:"
//!     - Each name is printed on its own line with a two-space indent, sorted

use crate::encoding::encoding_names;

pub fn run_list() {
    println!("Available encodings:");
    for name in encoding_names() {
        println!("  {}", name);
    }
}
