//! Interactive mode
//!
//! A menu-driven loop over one session: paste words, pull in official
//! data, and print any report on demand. Recoverable errors (a report
//! asked for before its input exists, a paste that does not parse) are
//! printed and the loop continues; only I/O failure ends it.

use crate::output::{
    ReportKind, ZeroStyle, print_comparison, print_counts, print_grid, print_two_letter_list,
};
use crate::session::Session;
use crate::source::{loader, nyt};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive loop until the player quits
///
/// # Errors
/// Returns an error only on stdin/stdout I/O failure.
pub fn run_interactive(zeros: ZeroStyle) -> Result<()> {
    println!("\n{}", "Spelling Bee Tally - Interactive Mode".bold());
    print_help();

    let mut session = Session::new();
    let stdin = io::stdin();

    loop {
        let input = prompt("Command")?;
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("").to_lowercase();
        let argument = parts.next();

        let outcome = match command.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("Bye.");
                return Ok(());
            }
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "words" | "w" => {
                println!("Paste your found words, end with a blank line:");
                let block = loader::read_block(&mut stdin.lock())?;
                session.set_found_words(&block);
                refresh_derived(&mut session);
                let count = session.found_words().map_or(0, <[String]>::len);
                println!("Recorded {count} words.");
                continue;
            }
            "fetch" | "f" => match nyt::fetch_today_answers() {
                Ok(answers) => {
                    println!("Fetched {} answers for today's puzzle.", answers.len());
                    session.set_answers(answers);
                    refresh_derived(&mut session);
                    continue;
                }
                Err(e) => Err(e),
            },
            "paste" | "p" => {
                println!("Paste the official grid, end with a blank line:");
                let block = loader::read_block(&mut stdin.lock())?;
                match session.read_official_grid(&block) {
                    Ok(()) => {
                        refresh_derived(&mut session);
                        println!("Official grid recorded.");
                        continue;
                    }
                    Err(e) => Err(e),
                }
            }
            "grid" | "g" => match parse_kind(argument) {
                Ok(kind) => print_grid(&mut session, kind, zeros),
                Err(message) => {
                    println!("{}", message.red());
                    continue;
                }
            },
            "tll" | "t" => match parse_kind(argument) {
                Ok(kind) => print_two_letter_list(&mut session, kind, false),
                Err(message) => {
                    println!("{}", message.red());
                    continue;
                }
            },
            "counts" | "c" => match parse_kind(argument) {
                Ok(kind) => print_counts(&mut session, kind, zeros),
                Err(message) => {
                    println!("{}", message.red());
                    continue;
                }
            },
            "compare" | "cmp" => print_comparison(&mut session, zeros, true),
            _ => {
                println!("Unknown command {command:?}. Type 'help' for the list.");
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("{}", e.to_string().red());
        }
    }
}

/// Recompute every derived cache that the changed inputs can reach
///
/// The session never invalidates implicitly, so this loop refreshes after
/// each ingestion. Sides that are still missing their input simply stay
/// unset until the player provides it.
fn refresh_derived(session: &mut Session) {
    let _ = session.regenerate_player_grid();
    let _ = session.regenerate_player_tll();
    let _ = session.recompare_grids();
    let _ = session.recompare_tlls();
}

/// Resolve an optional player/official argument, defaulting to player
fn parse_kind(argument: Option<&str>) -> Result<ReportKind, String> {
    argument.map_or(Ok(ReportKind::Player), |raw| {
        ReportKind::from_str(raw, true)
            .map_err(|_| format!("invalid kind {raw:?}: expected 'player' or 'official'"))
    })
}

fn print_help() {
    println!("\nCommands:");
    println!("  words            paste your found words");
    println!("  fetch            fetch today's official answers");
    println!("  paste            paste the official grid text");
    println!("  grid [kind]      show a grid (kind: player or official)");
    println!("  tll [kind]       show a two letter list");
    println!("  counts [kind]    show grid and two letter list together");
    println!("  compare          show what's left to find");
    println!("  quit             leave\n");
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_argument_defaults_to_player() {
        assert_eq!(parse_kind(None).unwrap(), ReportKind::Player);
    }

    #[test]
    fn kind_argument_is_case_insensitive() {
        assert_eq!(parse_kind(Some("Official")).unwrap(), ReportKind::Official);
        assert_eq!(parse_kind(Some("player")).unwrap(), ReportKind::Player);
    }

    #[test]
    fn bad_kind_argument_is_rejected() {
        let message = parse_kind(Some("judge")).unwrap_err();
        assert!(message.contains("judge"));
    }
}
