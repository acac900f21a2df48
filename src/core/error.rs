//! Error kinds for tally operations

use std::fmt;

/// Error type for session, ingestion, and comparison operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// A derived value was requested before its input was set
    MissingPrerequisite(&'static str),
    /// The remote puzzle source failed or returned an unusable payload
    DataSource(String),
    /// Pasted official-grid text did not match the expected format
    Parse(String),
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrerequisite(what) => write!(f, "missing prerequisite: {what}"),
            Self::DataSource(reason) => write!(f, "puzzle source unavailable: {reason}"),
            Self::Parse(reason) => write!(f, "could not parse official text: {reason}"),
        }
    }
}

impl std::error::Error for TallyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_step() {
        let err = TallyError::MissingPrerequisite("found words not set");
        assert_eq!(err.to_string(), "missing prerequisite: found words not set");
    }

    #[test]
    fn display_carries_source_reason() {
        let err = TallyError::DataSource("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = TallyError::Parse("row \"A 1\" is missing the ':' separator".to_string());
        assert!(err.to_string().contains("':' separator"));
    }
}
