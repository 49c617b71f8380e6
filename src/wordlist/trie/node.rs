use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::alphabet::{get_letter, ALPHABET};

#[derive(new)]
pub(crate) struct TrieNode {
    #[new(default)]
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) letter: char,
    #[new(default)]
    pub(crate) is_terminal: bool,
    #[new(default)]
    pub(crate) word: Option<String>,
    pub(crate) depth: usize,
}

impl Default for TrieNode {
    fn default() -> Self {
        TrieNode::new(' ', 0)
    }
}

impl TrieNode {
    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        let depth = self.depth + 1;
        self.children[idx]
            .get_or_insert_with(|| Box::new(TrieNode::new(get_letter(idx), depth)))
    }

    /// Returns true if the node was not terminal before.
    pub(crate) fn mark_terminal(&mut self, word: &str) -> bool {
        let added = !self.is_terminal;
        self.is_terminal = true;
        self.word = Some(word.to_string());
        added
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("word", &self.word)
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.into_iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
