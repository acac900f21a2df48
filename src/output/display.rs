//! Report printing for player, official, and comparison tallies
//!
//! Each print function lazily computes whatever the session is missing,
//! then writes a bold section header followed by the formatted table to
//! stdout. Missing inputs surface as `MissingPrerequisite` errors.

use super::formatters::{ZeroStyle, format_grid, format_two_letter_list};
use crate::core::TallyError;
use crate::session::Session;
use clap::ValueEnum;
use colored::Colorize;

/// Which side of the puzzle a report covers
///
/// Replaces the stringly-typed player/official selector with a tag that
/// clap validates at the CLI boundary and `match` checks exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Player,
    Official,
}

impl ReportKind {
    fn grid_heading(self) -> &'static str {
        match self {
            Self::Player => "- Player's Grid",
            Self::Official => "- Official Grid",
        }
    }

    fn tll_heading(self) -> &'static str {
        match self {
            Self::Player => "- Player's Two Letter List",
            Self::Official => "- Official Two Letter List",
        }
    }
}

/// Print one side's grid
///
/// # Errors
/// Returns [`TallyError::MissingPrerequisite`] if that side's input was
/// never ingested.
pub fn print_grid(
    session: &mut Session,
    kind: ReportKind,
    zeros: ZeroStyle,
) -> Result<(), TallyError> {
    let grid = match kind {
        ReportKind::Player => session.player_grid()?,
        ReportKind::Official => session.official_grid()?,
    };
    println!("{}", kind.grid_heading().bold());
    println!("{}", format_grid(grid, zeros));
    Ok(())
}

/// Print one side's two-letter list
///
/// # Errors
/// Returns [`TallyError::MissingPrerequisite`] if that side's input was
/// never ingested.
pub fn print_two_letter_list(
    session: &mut Session,
    kind: ReportKind,
    only_nonzero: bool,
) -> Result<(), TallyError> {
    let tll = match kind {
        ReportKind::Player => session.player_tll()?,
        ReportKind::Official => session.official_tll()?,
    };
    println!("{}", kind.tll_heading().bold());
    println!("{}", format_two_letter_list(tll, only_nonzero));
    Ok(())
}

/// Print one side's grid and two-letter list together
///
/// # Errors
/// Returns [`TallyError::MissingPrerequisite`] if that side's input was
/// never ingested.
pub fn print_counts(
    session: &mut Session,
    kind: ReportKind,
    zeros: ZeroStyle,
) -> Result<(), TallyError> {
    print_grid(session, kind, zeros)?;
    println!();
    print_two_letter_list(session, kind, false)
}

/// Print the official-minus-player grid comparison
///
/// # Errors
/// Returns [`TallyError::MissingPrerequisite`] if either side is missing.
pub fn print_grid_comparison(session: &mut Session, zeros: ZeroStyle) -> Result<(), TallyError> {
    let diff = session.grid_comparison()?;
    println!("{}", "- Grid Comparison".bold());
    println!("{}", format_grid(diff, zeros));
    Ok(())
}

/// Print the official-minus-player two-letter comparison
///
/// Callers default `only_nonzero` to true so a mostly-finished puzzle
/// shows only what is left.
///
/// # Errors
/// Returns [`TallyError::MissingPrerequisite`] if either side is missing.
pub fn print_two_letter_list_comparison(
    session: &mut Session,
    only_nonzero: bool,
) -> Result<(), TallyError> {
    let diff = session.tll_comparison()?;
    println!("{}", "- Two Letter List Comparison".bold());
    println!("{}", format_two_letter_list(diff, only_nonzero));
    Ok(())
}

/// Print both comparisons
///
/// # Errors
/// Returns [`TallyError::MissingPrerequisite`] if either side is missing.
pub fn print_comparison(
    session: &mut Session,
    zeros: ZeroStyle,
    only_nonzero: bool,
) -> Result<(), TallyError> {
    print_grid_comparison(session, zeros)?;
    println!();
    print_two_letter_list_comparison(session, only_nonzero)
}
