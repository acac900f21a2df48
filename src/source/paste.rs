//! Manual official-grid ingestion
//!
//! Parses the tab-delimited summary table the puzzle site shows on its
//! hints page, plus the optional two-letter list that follows it, for
//! players who paste the on-screen text instead of fetching. Parsing is
//! all-or-nothing: the caller only receives a value once the entire text
//! has parsed.
//!
//! Expected shape:
//!
//! ```text
//! 4\t5\t6\t7\t
//! A:\t1\t2\t0\t-\t
//! ...
//! Σ:\t...\t<total>
//! Two letter list:
//! AB-3 AC-1
//! CA-2
//! ```
//!
//! Each row cell maps to the header entry at the same index, so a header
//! with a gap (`4 5 7`) places the third cell under length 7. `-` cells
//! mean zero. The `Σ:` summary row is ignored.

use crate::core::{Grid, TallyError, TwoLetterList};

const TLL_SEPARATOR: &str = "Two letter list:";

/// Parsed official text: a grid, plus the two-letter list when present
#[derive(Debug, Clone)]
pub struct OfficialText {
    pub grid: Grid,
    pub two_letter_list: Option<TwoLetterList>,
}

/// Parse pasted official text into tallies
///
/// # Errors
/// Returns [`TallyError::Parse`] on an empty or non-numeric length header,
/// a row without the `:` separator, a row label that is not a single
/// letter, a count token that is neither an integer nor `-`, a row with
/// more cells than the header has lengths, or a malformed two-letter entry.
pub fn parse_official_text(text: &str) -> Result<OfficialText, TallyError> {
    let (grid_text, tll_text) = match text.split_once(TLL_SEPARATOR) {
        Some((grid, tll)) => (grid, Some(tll)),
        None => (text, None),
    };

    let grid = parse_grid_block(grid_text)?;
    let two_letter_list = tll_text.map(parse_tll_block).transpose()?;
    log::debug!(
        "parsed official grid with {} letters{}",
        grid.letters().len(),
        if two_letter_list.is_some() {
            " and a two-letter list"
        } else {
            ""
        }
    );
    Ok(OfficialText {
        grid,
        two_letter_list,
    })
}

fn parse_grid_block(text: &str) -> Result<Grid, TallyError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines
        .next()
        .ok_or_else(|| TallyError::Parse("grid text is empty".to_string()))?;
    let header = parse_header(header_line)?;

    let mut grid = Grid::new();
    for line in lines {
        // Trailing summary row
        if line.trim_start().starts_with('Σ') {
            continue;
        }

        let (label, cells) = line.split_once(':').ok_or_else(|| {
            TallyError::Parse(format!("row {line:?} is missing the ':' separator"))
        })?;
        let letter = single_letter(label)?;
        let counts = parse_counts(cells)?;
        if counts.len() > header.len() {
            return Err(TallyError::Parse(format!(
                "row for {letter} has {} cells but the header lists {} lengths",
                counts.len(),
                header.len()
            )));
        }
        for (i, count) in counts.into_iter().enumerate() {
            grid.set(letter, header[i], count);
        }
    }
    Ok(grid)
}

fn parse_header(line: &str) -> Result<Vec<usize>, TallyError> {
    let header: Vec<usize> = line
        .split('\t')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|_| {
                TallyError::Parse(format!("length header token {token:?} is not a number"))
            })
        })
        .collect::<Result<_, _>>()?;
    if header.is_empty() {
        return Err(TallyError::Parse("length header is empty".to_string()));
    }
    Ok(header)
}

fn single_letter(label: &str) -> Result<char, TallyError> {
    let mut chars = label.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(TallyError::Parse(format!(
            "row label {label:?} is not a single letter"
        ))),
    }
}

fn parse_counts(cells: &str) -> Result<Vec<i64>, TallyError> {
    cells
        .split('\t')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token == "-" {
                Ok(0)
            } else {
                token.parse().map_err(|_| {
                    TallyError::Parse(format!("count {token:?} is neither a number nor '-'"))
                })
            }
        })
        .collect()
}

fn parse_tll_block(text: &str) -> Result<TwoLetterList, TallyError> {
    let mut tll = TwoLetterList::new();
    for token in text.split_whitespace() {
        let (prefix, count) = token.split_once('-').ok_or_else(|| {
            TallyError::Parse(format!("two-letter entry {token:?} is missing '-'"))
        })?;
        if prefix.chars().count() != 2 {
            return Err(TallyError::Parse(format!(
                "two-letter entry {token:?} does not start with two letters"
            )));
        }
        let count = count.parse().map_err(|_| {
            TallyError::Parse(format!("two-letter count in {token:?} is not a number"))
        })?;
        tll.set(prefix, count);
    }
    Ok(tll)
}
