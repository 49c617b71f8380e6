use thiserror::Error;

/// Errors returned by trie operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("cannot insert an empty word")]
    EmptyWord,
}
