use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::{letter_indices, Trie};
use crate::wordlist::trie::TrieError;

impl Trie {
    /// True if `word` was inserted as a whole word.
    pub fn contains(&self, word: &str) -> Result<bool, TrieError> {
        Ok(self.get_node(word)?
            .map(|x| x.is_terminal)
            .unwrap_or(false))
    }

    /// True if at least one stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> Result<bool, TrieError> {
        Ok(self.get_node(prefix)?.is_some())
    }

    /// Every stored word starting with `prefix`, the prefix itself included.
    ///
    /// Words come out in breadth-first order of the subtree under `prefix`:
    /// shorter words first, words of equal length in alphabetical order.
    /// An unknown prefix yields an empty vector and the empty prefix yields
    /// every stored word.
    pub fn words_by_prefix(&self, prefix: &str) -> Result<Vec<String>, TrieError> {
        Ok(self.get_node(prefix)?
            .map(|node| node.breadth_first()
                .filter(|x| x.is_terminal)
                .filter_map(|x| x.word.clone())
                .collect())
            .unwrap_or_default())
    }

    pub(crate) fn get_node(&self, prefix: &str) -> Result<Option<&TrieNode>, TrieError> {
        let path = letter_indices(prefix)?;
        Ok(path.into_iter()
            .try_fold(&self.root, |node, idx| node.get_child(idx)))
    }
}
