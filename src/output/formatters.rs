//! Table rendering for grids and two-letter lists
//!
//! Pure string builders; nothing here touches stdout. Bolding goes through
//! `colored`, which wraps text in `ESC[1m … ESC[0m` and strips itself when
//! the output is not a terminal.

use crate::core::{Grid, TwoLetterList};
use colored::Colorize;

/// Fixed message for an empty (or filtered-empty) two-letter list
pub const NO_COMBOS_MESSAGE: &str = "No combos to display";

/// How zero cells render in a grid table
///
/// `Digit` is the canonical machine-readable rule; `Dash` is a display
/// toggle that swaps exactly the cells whose value is zero for `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroStyle {
    #[default]
    Digit,
    Dash,
}

/// Render a grid as a text table
///
/// Columns cover the contiguous length range from 4 up to the largest
/// length in the grid, so internal gaps render as zero columns. Rows are
/// letters in ascending order. The header, the per-row sums, and the
/// trailing `Σ:` summary row are bold. No trailing newline.
#[must_use]
pub fn format_grid(grid: &Grid, zeros: ZeroStyle) -> String {
    let lengths: Vec<usize> = (4..=grid.max_len()).collect();

    let mut out = String::new();

    let mut header = String::from("  ");
    for len in &lengths {
        header.push_str(&format!("{len:>3}"));
    }
    header.push_str("   Σ");
    out.push_str(&format!("{}\n", header.bold()));

    for letter in grid.letters() {
        let mut cells = String::new();
        let mut row_sum = 0;
        for &len in &lengths {
            let count = grid.count(letter, len);
            row_sum += count;
            cells.push_str(&format_cell(count, zeros));
        }
        out.push_str(&format!(
            "{}:{}{}\n",
            letter.to_string().bold(),
            cells,
            format!("{row_sum:>4}").bold()
        ));
    }

    let mut summary = String::from("Σ:");
    let mut total = 0;
    for &len in &lengths {
        let column = grid.column_total(len);
        total += column;
        summary.push_str(&format!("{column:>3}"));
    }
    summary.push_str(&format!("{total:>4}"));
    out.push_str(&format!("{}", summary.bold()));

    out
}

fn format_cell(count: i64, zeros: ZeroStyle) -> String {
    match (count, zeros) {
        (0, ZeroStyle::Dash) => format!("{:>3}", "-"),
        _ => format!("{count:>3}"),
    }
}

/// Render a two-letter list as `XX-n` tokens
///
/// Entries are sorted by prefix; a line break is inserted whenever the
/// leading letter changes. With `only_nonzero`, entries with count <= 0
/// are dropped first. An empty result renders the fixed no-combos message.
#[must_use]
pub fn format_two_letter_list(tll: &TwoLetterList, only_nonzero: bool) -> String {
    let entries: Vec<(&str, i64)> = tll
        .entries()
        .into_iter()
        .filter(|&(_, count)| !only_nonzero || count > 0)
        .collect();

    if entries.is_empty() {
        return NO_COMBOS_MESSAGE.to_string();
    }

    let mut out = String::new();
    let mut previous_leading: Option<char> = None;
    for (prefix, count) in entries {
        let leading = prefix.chars().next();
        if previous_leading.is_some() && previous_leading != leading {
            out.push('\n');
        }
        out.push_str(&format!("{prefix}-{count} "));
        previous_leading = leading;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    /// Drop ANSI escape sequences so assertions hold with or without color
    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn grid_table_has_header_rows_and_summary() {
        let grid = Grid::from_words(&words(&["ABLE", "ABOUT", "BONUS", "BITTER"]));
        let table = strip_ansi(&format_grid(&grid, ZeroStyle::Digit));

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    4  5  6   Σ");
        assert_eq!(lines[1], "A:  1  1  0   2");
        assert_eq!(lines[2], "B:  0  1  1   2");
        assert_eq!(lines[3], "Σ:  1  2  1   4");
    }

    #[test]
    fn dash_style_swaps_only_zero_cells() {
        let grid = Grid::from_words(&words(&["ABLE", "ABOUT", "BONUS", "BITTER"]));
        let table = strip_ansi(&format_grid(&grid, ZeroStyle::Dash));

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "A:  1  1  -   2");
        assert_eq!(lines[2], "B:  -  1  1   2");
        // The summary keeps digits
        assert_eq!(lines[3], "Σ:  1  2  1   4");
    }

    #[test]
    fn dash_style_never_mangles_multi_digit_counts() {
        let mut grid = Grid::new();
        grid.set('A', 4, 10);
        grid.set('A', 5, 0);
        let table = strip_ansi(&format_grid(&grid, ZeroStyle::Dash));

        assert!(table.contains(" 10  -"));
    }

    #[test]
    fn internal_length_gaps_render_as_zero_columns() {
        let grid = Grid::from_words(&words(&["ABLE", "ABANDON"]));
        let table = strip_ansi(&format_grid(&grid, ZeroStyle::Digit));

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "    4  5  6  7   Σ");
        assert_eq!(lines[1], "A:  1  0  0  1   2");
    }

    #[test]
    fn negative_diff_cells_render_right_justified() {
        let official = Grid::from_words(&words(&["ABLE"]));
        let player = Grid::from_words(&words(&["ABLE", "ABOUT", "ABOUND"]));
        let table = strip_ansi(&format_grid(&official.diff(&player), ZeroStyle::Digit));

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "A:  0 -1 -1  -2");
        assert_eq!(lines[2], "Σ:  0 -1 -1  -2");
    }

    #[test]
    fn header_and_summary_are_bold_when_forced() {
        colored::control::set_override(true);
        let grid = Grid::from_words(&words(&["ABLE"]));
        let table = format_grid(&grid, ZeroStyle::Digit);
        colored::control::unset_override();

        assert!(table.starts_with("\u{1b}[1m"));
        assert!(table.contains("\u{1b}[0m"));
    }

    #[test]
    fn two_letter_list_groups_by_leading_letter() {
        let tll = TwoLetterList::from_words(&words(&["CAT", "CART", "COG", "DOG"]));
        let text = format_two_letter_list(&tll, false);
        assert_eq!(text, "CA-2 CO-1 \nDO-1 ");
    }

    #[test]
    fn empty_list_renders_the_fixed_message() {
        assert_eq!(
            format_two_letter_list(&TwoLetterList::new(), false),
            NO_COMBOS_MESSAGE
        );
    }

    #[test]
    fn only_nonzero_filters_before_rendering() {
        let mut tll = TwoLetterList::new();
        tll.set("AB", 0);
        tll.set("AC", 2);
        assert_eq!(format_two_letter_list(&tll, true), "AC-2 ");

        let mut all_zero = TwoLetterList::new();
        all_zero.set("AB", 0);
        assert_eq!(format_two_letter_list(&all_zero, true), NO_COMBOS_MESSAGE);
        assert_eq!(format_two_letter_list(&all_zero, false), "AB-0 ");
    }

    #[test]
    fn negative_counts_survive_unfiltered_rendering() {
        let mut tll = TwoLetterList::new();
        tll.set("AB", -2);
        tll.set("BA", 1);
        assert_eq!(format_two_letter_list(&tll, false), "AB--2 \nBA-1 ");
        assert_eq!(format_two_letter_list(&tll, true), "BA-1 ");
    }
}
