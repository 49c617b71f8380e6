use std::fmt::{Debug, Formatter};

use crate::alphabet::get_idx;
use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::TrieError;

/// A prefix tree over the letters `A`-`Z`.
///
/// Each node owns up to one child per letter. A node reached by a complete
/// inserted word is terminal and keeps a copy of that word, so prefix queries
/// never have to rebuild words from their paths.
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<(), TrieError> {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> Result<bool, TrieError> {
        Trie::contains(self, word)
    }
}

/// Child offsets for every letter of `word`, checked before anything is touched.
pub(crate) fn letter_indices(word: &str) -> Result<Vec<usize>, TrieError> {
    word.chars()
        .enumerate()
        .map(|(position, character)| get_idx(character)
            .map_err(|_| TrieError::InvalidCharacter { character, position }))
        .collect()
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default(),
            len: 0,
        }
    }

    /// Stores `word`. Re-inserting a stored word overwrites it in place.
    ///
    /// Fails without modifying the trie if `word` is empty or holds a
    /// character outside the alphabet.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }
        let path = letter_indices(word)?;

        let mut current = &mut self.root;
        for idx in path {
            current = current.get_or_create_child(idx);
        }
        if current.mark_terminal(word) {
            self.len += 1;
        }
        Ok(())
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.root.breadth_first()).finish()
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashset;

    use crate::wordlist::index::Index;
    use crate::wordlist::trie::{Trie, TrieError};

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        words.iter().for_each(|word| assert!(trie.contains(word).unwrap()));
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let bad_words = vec!["HE", "H", "LOL", "BANANA", "HELLOS"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        bad_words.iter().for_each(|word| assert!(!trie.contains(word).unwrap()));
    }

    #[test]
    fn extends_existing_path() {
        let mut trie = Trie::new();
        trie.insert("CARD").unwrap();
        trie.insert("CAR").unwrap();
        trie.insert("CARDS").unwrap();
        assert!(trie.contains("CAR").unwrap());
        assert!(!trie.contains("CA").unwrap());
        assert_eq!(trie.words_by_prefix("CAR").unwrap(), vec!["CAR", "CARD", "CARDS"]);
    }

    #[test]
    fn duplicate_insert_counts_once() {
        let mut trie = Trie::new();
        trie.insert("A").unwrap();
        trie.insert("A").unwrap();
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.words_by_prefix("A").unwrap(), vec!["A"]);
    }

    #[test]
    fn rejects_invalid_characters_without_mutation() {
        let mut trie = Trie::new();
        trie.insert("CAT").unwrap();

        assert_eq!(trie.insert("CAt"),
                   Err(TrieError::InvalidCharacter { character: 't', position: 2 }));
        assert_eq!(trie.insert("DOG!"),
                   Err(TrieError::InvalidCharacter { character: '!', position: 3 }));

        assert_eq!(trie.len(), 1);
        assert!(trie.words_by_prefix("D").unwrap().is_empty());
        assert_eq!(trie.words_by_prefix("").unwrap(), vec!["CAT"]);
        assert_eq!(trie.root.breadth_first().count(), 4);
    }

    #[test]
    fn rejects_empty_word() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert(""), Err(TrieError::EmptyWord));
        assert!(trie.is_empty());
        assert!(!trie.root.is_terminal);
    }

    #[test]
    fn debug_lists_nodes() {
        let mut trie = Trie::new();
        trie.add_all(vec!["AB", "B"]).unwrap();
        let letters = trie.root.breadth_first().map(|x| x.letter).collect::<Vec<_>>();
        assert_eq!(letters, vec![' ', 'A', 'B', 'B']);
        let terminal = trie.root.breadth_first()
            .filter_map(|x| x.word.clone())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(terminal, hashset! {"AB".to_string(), "B".to_string()});
        assert!(format!("{:?}", trie).contains("is_terminal: true"));
    }
}
