//! Spelling Bee Tally - CLI
//!
//! Thin wrapper over the tally engine: count your found words, pull or
//! paste the official data, and see what's left to find.

use anyhow::Result;
use bee_tally::commands::{run_compare, run_counts, run_interactive, run_official};
use bee_tally::output::ZeroStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bee_tally",
    about = "Tally Spelling Bee words into grids and two-letter lists, and compare against the official puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Render zero grid cells as '-' instead of '0'
    #[arg(long, global = true)]
    dash_zeros: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tally your found words into a grid and two-letter list
    Counts {
        /// Read found words from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the official grid and two-letter list for today's puzzle
    Official {
        /// Parse a pasted official grid from stdin instead of fetching
        #[arg(short, long)]
        paste: bool,
    },

    /// Compare your found words against the official answers
    Compare {
        /// Read found words from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Parse a pasted official grid from stdin instead of fetching
        #[arg(short, long)]
        paste: bool,

        /// Include settled (zero) entries in the two-letter comparison
        #[arg(short, long)]
        all: bool,
    },

    /// Menu-driven interactive mode (default)
    Interactive,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let zeros = if cli.dash_zeros {
        ZeroStyle::Dash
    } else {
        ZeroStyle::Digit
    };

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Counts { file } => run_counts(file.as_deref(), zeros),
        Commands::Official { paste } => run_official(paste, zeros),
        Commands::Compare { file, paste, all } => run_compare(file.as_deref(), paste, all, zeros),
        Commands::Interactive => run_interactive(zeros),
    }
}
