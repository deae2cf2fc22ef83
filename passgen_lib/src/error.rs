use thiserror::Error;

/// A generation request that cannot produce any password.
///
/// Scoring has no error kind, every string can be scored.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Password length must be at least 1")]
    InvalidLength,

    #[error("Password count must be at least 1")]
    InvalidCount,

    #[error("At least one character set must be enabled")]
    NoCharacterSets,

    #[error("No valid characters available after exclusions")]
    AllCharactersExcluded,
}
