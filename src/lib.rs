//! Spelling Bee Tally
//!
//! Tallies a player's found words for the daily Spelling Bee puzzle,
//! ingests the official answer data (fetched or pasted), and renders
//! letter × length grids, two-letter lists, and official-vs-player
//! comparisons as bold-headed text tables.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_tally::output::{ZeroStyle, format_grid};
//! use bee_tally::session::Session;
//!
//! let mut session = Session::new();
//! session.set_found_words("onion noon opinion");
//!
//! let grid = session.player_grid().unwrap();
//! println!("{}", format_grid(grid, ZeroStyle::Digit));
//! ```

// Core domain types
pub mod core;

// Puzzle session state
pub mod session;

// Answer and grid ingestion
pub mod source;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;
