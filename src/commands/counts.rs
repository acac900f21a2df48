//! Player-side tally report

use crate::output::{ReportKind, ZeroStyle, print_counts};
use crate::session::Session;
use crate::source::loader;
use anyhow::Result;
use std::io;
use std::path::Path;

/// Tally found words from a file or stdin and print the player report
///
/// # Errors
/// Returns an error if the input cannot be read.
pub fn run_counts(words_file: Option<&Path>, zeros: ZeroStyle) -> Result<()> {
    let text = match words_file {
        Some(path) => loader::load_text(path)?,
        None => {
            eprintln!("Paste your found words, then press Ctrl-D:");
            loader::read_to_string(&mut io::stdin().lock())?
        }
    };

    let mut session = Session::new();
    session.set_found_words(&text);
    print_counts(&mut session, ReportKind::Player, zeros)?;
    Ok(())
}
