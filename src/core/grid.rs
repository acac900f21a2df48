//! Letter × word-length tally grid
//!
//! A Grid counts words by first letter and length. Storage is sparse: only
//! (letter, length) pairs that were actually observed (or explicitly set)
//! are present, and every absent pair reads as zero. Counts are `i64` so
//! the same type carries both plain tallies and official-minus-player
//! differences, where negative cells are meaningful.

use rustc_hash::FxHashMap;

/// Sparse first-letter × word-length counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: FxHashMap<char, FxHashMap<usize, i64>>,
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a word list into a grid
    ///
    /// Increments the cell at (first letter, length) for each word. Only
    /// observed pairs are stored.
    ///
    /// # Panics
    /// Panics if a word is empty. Whitespace-split ingestion never produces
    /// empty words.
    ///
    /// # Examples
    /// ```
    /// use bee_tally::core::Grid;
    ///
    /// let words = vec!["ONION".to_string(), "NOON".to_string(), "OPINION".to_string()];
    /// let grid = Grid::from_words(&words);
    /// assert_eq!(grid.count('O', 5), 1);
    /// assert_eq!(grid.count('N', 4), 1);
    /// assert_eq!(grid.count('O', 7), 1);
    /// assert_eq!(grid.count('Z', 4), 0);
    /// ```
    #[must_use]
    pub fn from_words(words: &[String]) -> Self {
        let mut grid = Self::new();
        for word in words {
            let letter = word.chars().next().expect("words must be non-empty");
            let len = word.chars().count();
            *grid
                .cells
                .entry(letter)
                .or_default()
                .entry(len)
                .or_insert(0) += 1;
        }
        grid
    }

    /// Set a cell to an explicit value, creating the letter row if needed
    ///
    /// Used by the official-grid parser and the diff operation, which keep
    /// explicit zero cells so letter rows survive into display.
    pub fn set(&mut self, letter: char, len: usize, count: i64) {
        self.cells.entry(letter).or_default().insert(len, count);
    }

    /// Zero-default cell lookup
    #[must_use]
    pub fn count(&self, letter: char, len: usize) -> i64 {
        self.cells
            .get(&letter)
            .and_then(|row| row.get(&len))
            .copied()
            .unwrap_or(0)
    }

    /// True if no letter has ever been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letters present, sorted ascending
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.cells.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Largest word length present anywhere in the grid, zero when empty
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.cells
            .values()
            .flat_map(|row| row.keys().copied())
            .max()
            .unwrap_or(0)
    }

    /// Sum of one length column across all letters
    #[must_use]
    pub fn column_total(&self, len: usize) -> i64 {
        self.cells.values().filter_map(|row| row.get(&len)).sum()
    }

    /// Grand total over every stored cell
    #[must_use]
    pub fn total(&self) -> i64 {
        self.cells.values().flat_map(|row| row.values()).sum()
    }

    /// Official-minus-player difference
    ///
    /// `self` plays the official role: the result contains exactly the
    /// letters present in `self`, so letters only the player found are
    /// excluded. Within an official letter the length set is the union of
    /// both sides, so player surplus at a length the official list lacks
    /// still shows up as a negative cell. Zero differences are stored
    /// explicitly to keep the letter rows intact.
    #[must_use]
    pub fn diff(&self, player: &Self) -> Self {
        let mut out = Self::new();
        for (&letter, official_row) in &self.cells {
            let mut lengths: Vec<usize> = official_row.keys().copied().collect();
            if let Some(player_row) = player.cells.get(&letter) {
                lengths.extend(player_row.keys().copied());
            }
            lengths.sort_unstable();
            lengths.dedup();
            for len in lengths {
                out.set(letter, len, self.count(letter, len) - player.count(letter, len));
            }
        }
        out
    }
}
