//! Official-side tally report
//!
//! Fetches today's answers from the puzzle site, or parses a pasted
//! official grid when the player prefers not to go over the network.

use crate::output::{ReportKind, ZeroStyle, print_counts};
use crate::session::Session;
use crate::source::{loader, nyt};
use anyhow::Result;
use std::io;

/// Ingest official data and print the official report
///
/// # Errors
/// Returns an error if the fetch fails, the pasted text cannot be read,
/// or the pasted text does not parse.
pub fn run_official(paste: bool, zeros: ZeroStyle) -> Result<()> {
    let mut session = Session::new();
    ingest_official(&mut session, paste)?;
    print_counts(&mut session, ReportKind::Official, zeros)?;
    Ok(())
}

/// Fill a session's official side, by paste or by fetch
///
/// # Errors
/// Returns an error if the fetch fails or the pasted text cannot be read
/// or parsed.
pub fn ingest_official(session: &mut Session, paste: bool) -> Result<()> {
    if paste {
        eprintln!("Paste the official grid (and two letter list), then press Ctrl-D:");
        let text = loader::read_to_string(&mut io::stdin().lock())?;
        session.read_official_grid(&text)?;
    } else {
        let answers = nyt::fetch_today_answers()?;
        eprintln!("Fetched {} answers for today's puzzle.", answers.len());
        session.set_answers(answers);
    }
    Ok(())
}
