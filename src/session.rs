//! Puzzle session state
//!
//! A [`Session`] holds one player's found words, the official answer data,
//! and every tally derived from them. Derived values are computed on first
//! request and cached. Caches are never invalidated implicitly: replacing
//! the found words does not touch an already-computed player grid, and a
//! stale comparison stays until `recompare_*` runs. The `regenerate_*` and
//! `recompare_*` calls are the only way to refresh a cached value, which
//! keeps staleness rules auditable.

use crate::core::{Grid, TallyError, TwoLetterList};
use crate::source::paste;

const NO_FOUND_WORDS: &str = "found words not set; paste or load your word list first";
const NO_OFFICIAL: &str =
    "official answers not loaded; fetch the puzzle or paste the official grid first";

/// One puzzle's worth of player and official tallies
#[derive(Debug, Clone, Default)]
pub struct Session {
    found_words: Option<Vec<String>>,
    answers: Option<Vec<String>>,
    player_grid: Option<Grid>,
    player_tll: Option<TwoLetterList>,
    official_grid: Option<Grid>,
    official_tll: Option<TwoLetterList>,
    grid_diff: Option<Grid>,
    tll_diff: Option<TwoLetterList>,
}

impl Session {
    /// Create a session with nothing ingested yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the player's found words from pasted text
    ///
    /// Splits on whitespace and upper-cases each token. Overwrites any
    /// prior word list but leaves already-computed tallies cached; call
    /// [`Self::regenerate_player_grid`] / [`Self::regenerate_player_tll`]
    /// to refresh them.
    pub fn set_found_words(&mut self, text: &str) {
        let words: Vec<String> = text.split_whitespace().map(str::to_uppercase).collect();
        log::debug!("recorded {} found words", words.len());
        self.found_words = Some(words);
    }

    /// The recorded found words, if any
    #[must_use]
    pub fn found_words(&self) -> Option<&[String]> {
        self.found_words.as_deref()
    }

    /// Record the official answer list
    ///
    /// Upper-cases the answers and derives the official grid and two-letter
    /// list from them immediately, mirroring the remote-fetch path.
    pub fn set_answers(&mut self, answers: Vec<String>) {
        let answers: Vec<String> = answers.iter().map(|w| w.to_uppercase()).collect();
        log::debug!("recorded {} official answers", answers.len());
        self.official_grid = Some(Grid::from_words(&answers));
        self.official_tll = Some(TwoLetterList::from_words(&answers));
        self.answers = Some(answers);
    }

    /// The recorded official answers, if any
    #[must_use]
    pub fn answers(&self) -> Option<&[String]> {
        self.answers.as_deref()
    }

    /// Parse a pasted official grid (and optional two-letter list)
    ///
    /// The parse is atomic: nothing is stored unless the whole text parses.
    ///
    /// # Errors
    /// Returns [`TallyError::Parse`] when the text does not match the
    /// tab-delimited format the puzzle site publishes.
    pub fn read_official_grid(&mut self, text: &str) -> Result<(), TallyError> {
        let parsed = paste::parse_official_text(text)?;
        self.official_grid = Some(parsed.grid);
        if let Some(tll) = parsed.two_letter_list {
            self.official_tll = Some(tll);
        }
        Ok(())
    }

    /// The player grid, computed from found words on first access
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no found words were
    /// ever recorded.
    pub fn player_grid(&mut self) -> Result<&Grid, TallyError> {
        if self.player_grid.is_none() {
            self.regenerate_player_grid()?;
        }
        Ok(self
            .player_grid
            .as_ref()
            .expect("regenerate_player_grid fills the cache"))
    }

    /// Recompute the player grid from the current found words
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no found words were
    /// ever recorded.
    pub fn regenerate_player_grid(&mut self) -> Result<(), TallyError> {
        let words = self
            .found_words
            .as_ref()
            .ok_or(TallyError::MissingPrerequisite(NO_FOUND_WORDS))?;
        self.player_grid = Some(Grid::from_words(words));
        Ok(())
    }

    /// The player two-letter list, computed from found words on first access
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no found words were
    /// ever recorded.
    pub fn player_tll(&mut self) -> Result<&TwoLetterList, TallyError> {
        if self.player_tll.is_none() {
            self.regenerate_player_tll()?;
        }
        Ok(self
            .player_tll
            .as_ref()
            .expect("regenerate_player_tll fills the cache"))
    }

    /// Recompute the player two-letter list from the current found words
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no found words were
    /// ever recorded.
    pub fn regenerate_player_tll(&mut self) -> Result<(), TallyError> {
        let words = self
            .found_words
            .as_ref()
            .ok_or(TallyError::MissingPrerequisite(NO_FOUND_WORDS))?;
        self.player_tll = Some(TwoLetterList::from_words(words));
        Ok(())
    }

    /// The official grid, from a fetch, `set_answers`, or a pasted grid
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no official data was
    /// ever ingested.
    pub fn official_grid(&mut self) -> Result<&Grid, TallyError> {
        if self.official_grid.is_none() {
            self.regenerate_official_grid()?;
        }
        Ok(self
            .official_grid
            .as_ref()
            .expect("regenerate_official_grid fills the cache"))
    }

    /// Recompute the official grid from the stored answer list
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no answer list is
    /// stored. A grid ingested via [`Self::read_official_grid`] has no
    /// backing answer list to regenerate from.
    pub fn regenerate_official_grid(&mut self) -> Result<(), TallyError> {
        let answers = self
            .answers
            .as_ref()
            .ok_or(TallyError::MissingPrerequisite(NO_OFFICIAL))?;
        self.official_grid = Some(Grid::from_words(answers));
        Ok(())
    }

    /// The official two-letter list
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no official data was
    /// ever ingested.
    pub fn official_tll(&mut self) -> Result<&TwoLetterList, TallyError> {
        if self.official_tll.is_none() {
            self.regenerate_official_tll()?;
        }
        Ok(self
            .official_tll
            .as_ref()
            .expect("regenerate_official_tll fills the cache"))
    }

    /// Recompute the official two-letter list from the stored answer list
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if no answer list is
    /// stored.
    pub fn regenerate_official_tll(&mut self) -> Result<(), TallyError> {
        let answers = self
            .answers
            .as_ref()
            .ok_or(TallyError::MissingPrerequisite(NO_OFFICIAL))?;
        self.official_tll = Some(TwoLetterList::from_words(answers));
        Ok(())
    }

    /// The official-minus-player grid difference, computed on first access
    ///
    /// Lazily fills both underlying grids first. The result is cached and
    /// not refreshed when either side changes; call
    /// [`Self::recompare_grids`] for that.
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if either side cannot be
    /// computed.
    pub fn grid_comparison(&mut self) -> Result<&Grid, TallyError> {
        if self.grid_diff.is_none() {
            self.recompare_grids()?;
        }
        Ok(self
            .grid_diff
            .as_ref()
            .expect("recompare_grids fills the cache"))
    }

    /// Recompute the grid difference from the current player/official grids
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if either side cannot be
    /// computed.
    pub fn recompare_grids(&mut self) -> Result<(), TallyError> {
        self.player_grid()?;
        self.official_grid()?;
        let official = self.official_grid.as_ref().expect("ensured above");
        let player = self.player_grid.as_ref().expect("ensured above");
        self.grid_diff = Some(official.diff(player));
        Ok(())
    }

    /// The official-minus-player two-letter difference
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if either side cannot be
    /// computed.
    pub fn tll_comparison(&mut self) -> Result<&TwoLetterList, TallyError> {
        if self.tll_diff.is_none() {
            self.recompare_tlls()?;
        }
        Ok(self
            .tll_diff
            .as_ref()
            .expect("recompare_tlls fills the cache"))
    }

    /// Recompute the two-letter difference from the current lists
    ///
    /// # Errors
    /// Returns [`TallyError::MissingPrerequisite`] if either side cannot be
    /// computed.
    pub fn recompare_tlls(&mut self) -> Result<(), TallyError> {
        self.player_tll()?;
        self.official_tll()?;
        let official = self.official_tll.as_ref().expect("ensured above");
        let player = self.player_tll.as_ref().expect("ensured above");
        self.tll_diff = Some(official.diff(player));
        Ok(())
    }
}
