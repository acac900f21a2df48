//! Comparison report
//!
//! Ingests both sides and prints the official-minus-player grid and
//! two-letter comparisons.

use super::official::ingest_official;
use crate::output::{ZeroStyle, print_comparison};
use crate::session::Session;
use crate::source::loader;
use anyhow::Result;
use std::io;
use std::path::Path;

/// Compare found words against the official answers and print both diffs
///
/// Found words come from `words_file` when given, otherwise from a pasted
/// stdin block ended by a blank line (leaving the rest of stdin free for a
/// pasted official grid). The two-letter comparison hides settled entries
/// unless `show_all` is set.
///
/// # Errors
/// Returns an error if either side cannot be ingested.
pub fn run_compare(
    words_file: Option<&Path>,
    paste: bool,
    show_all: bool,
    zeros: ZeroStyle,
) -> Result<()> {
    let text = match words_file {
        Some(path) => loader::load_text(path)?,
        None => {
            eprintln!("Paste your found words, then a blank line:");
            loader::read_block(&mut io::stdin().lock())?
        }
    };

    let mut session = Session::new();
    session.set_found_words(&text);
    ingest_official(&mut session, paste)?;

    print_comparison(&mut session, zeros, !show_all)?;
    Ok(())
}
