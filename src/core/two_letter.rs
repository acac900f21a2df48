//! Two-letter prefix counter
//!
//! Counts words grouped by their first two letters, the second summary the
//! puzzle publishes alongside the letter grid. Same sparsity rule as
//! [`Grid`](super::Grid): absent prefixes read as zero.

use rustc_hash::FxHashMap;

/// Sparse first-two-letter counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoLetterList {
    counts: FxHashMap<String, i64>,
}

impl TwoLetterList {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a word list by two-letter prefix
    ///
    /// # Panics
    /// Panics if any word is shorter than two letters. Valid puzzle words
    /// are at least four letters long.
    ///
    /// # Examples
    /// ```
    /// use bee_tally::core::TwoLetterList;
    ///
    /// let words = vec!["CAT".to_string(), "DOG".to_string(), "COG".to_string()];
    /// let tll = TwoLetterList::from_words(&words);
    /// assert_eq!(tll.count("CA"), 1);
    /// assert_eq!(tll.count("CO"), 1);
    /// assert_eq!(tll.count("DO"), 1);
    /// ```
    #[must_use]
    pub fn from_words(words: &[String]) -> Self {
        let mut tll = Self::new();
        for word in words {
            let prefix: String = word.chars().take(2).collect();
            assert_eq!(
                prefix.chars().count(),
                2,
                "word {word:?} is shorter than two letters"
            );
            *tll.counts.entry(prefix).or_insert(0) += 1;
        }
        tll
    }

    /// Set a prefix to an explicit value
    pub fn set(&mut self, prefix: impl Into<String>, count: i64) {
        self.counts.insert(prefix.into(), count);
    }

    /// Zero-default lookup
    #[must_use]
    pub fn count(&self, prefix: &str) -> i64 {
        self.counts.get(prefix).copied().unwrap_or(0)
    }

    /// True if no prefix has ever been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Grand total over every stored prefix
    #[must_use]
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Entries sorted by prefix, ascending
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> = self
            .counts
            .iter()
            .map(|(prefix, &count)| (prefix.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Official-minus-player difference
    ///
    /// Keys come from `self` (the official side); prefixes the player has
    /// but the official list lacks are excluded, matching the grid rule.
    /// Zero differences are stored explicitly.
    #[must_use]
    pub fn diff(&self, player: &Self) -> Self {
        let mut out = Self::new();
        for (prefix, &count) in &self.counts {
            out.set(prefix.clone(), count - player.count(prefix));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn from_words_counts_prefixes() {
        let tll = TwoLetterList::from_words(&words(&["CAT", "DOG", "COG"]));
        assert_eq!(tll.count("CA"), 1);
        assert_eq!(tll.count("CO"), 1);
        assert_eq!(tll.count("DO"), 1);
        assert_eq!(tll.count("XY"), 0);
    }

    #[test]
    fn total_equals_word_count() {
        let tll = TwoLetterList::from_words(&words(&["ABLE", "ABOUT", "ACORN", "BAKER"]));
        assert_eq!(tll.total(), 4);

        assert_eq!(TwoLetterList::from_words(&[]).total(), 0);
        assert!(TwoLetterList::from_words(&[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "shorter than two letters")]
    fn one_letter_word_violates_the_precondition() {
        let _ = TwoLetterList::from_words(&words(&["ABLE", "A"]));
    }

    #[test]
    fn entries_are_sorted_by_prefix() {
        let tll = TwoLetterList::from_words(&words(&["DOG", "CAT", "COG", "CART"]));
        let entries = tll.entries();
        assert_eq!(
            entries,
            vec![("CA", 2), ("CO", 1), ("DO", 1)]
        );
    }

    #[test]
    fn diff_is_official_minus_player() {
        let official = TwoLetterList::from_words(&words(&["ABLE", "ABOUT", "BAKER"]));
        let player = TwoLetterList::from_words(&words(&["ABLE", "BAKER", "BONUS"]));
        let diff = official.diff(&player);

        assert_eq!(diff.count("AB"), 1);
        assert_eq!(diff.count("BA"), 0);
        // BO exists only on the player side and is excluded
        assert_eq!(diff.entries().len(), 2);
    }

    #[test]
    fn diff_is_antisymmetric_over_a_shared_key_set() {
        let left = TwoLetterList::from_words(&words(&["ABLE", "ABOUT", "BAKER"]));
        let right = TwoLetterList::from_words(&words(&["ABODE", "BAKES", "BAGEL"]));

        let forward = left.diff(&right);
        let backward = right.diff(&left);
        for (prefix, count) in forward.entries() {
            assert_eq!(count, -backward.count(prefix));
        }
    }

    #[test]
    fn diff_treats_missing_player_prefix_as_zero() {
        let official = TwoLetterList::from_words(&words(&["ABLE", "BAKER"]));
        let player = TwoLetterList::new();
        let diff = official.diff(&player);

        assert_eq!(diff.count("AB"), 1);
        assert_eq!(diff.count("BA"), 1);
    }
}
