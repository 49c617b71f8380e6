pub mod trie;
pub mod search;

mod error;
mod node;
mod iterators;

pub use error::TrieError;
pub use trie::Trie;
