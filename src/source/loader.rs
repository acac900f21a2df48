//! Found-word input loading
//!
//! Plain I/O helpers for getting pasted or saved word lists into a
//! session. Splitting and upper-casing happen in the session itself.

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

/// Read a found-word text block from a file
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use bee_tally::source::loader::load_text;
///
/// let text = load_text("found_words.txt").unwrap();
/// println!("loaded {} bytes", text.len());
/// ```
pub fn load_text<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Read everything from a reader until EOF
///
/// # Errors
/// Returns an I/O error if reading fails.
pub fn read_to_string<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Read lines from a reader until the first blank line or EOF
///
/// Used by the interactive mode, where a blank line ends a pasted block.
///
/// # Errors
/// Returns an I/O error if reading fails.
pub fn read_block<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut block = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        block.push_str(&line);
        block.push('\n');
    }
    Ok(block)
}
