//! Answer and official-grid ingestion
//!
//! Everything that brings puzzle data into a session: the remote answer
//! source, the pasted-text parser for the official grid, and plain input
//! loading helpers for found words.

pub mod loader;
pub mod nyt;
pub mod paste;

pub use nyt::fetch_today_answers;
pub use paste::{OfficialText, parse_official_text};
