use std::collections::VecDeque;

use crate::alphabet::ALPHABET;
use crate::wordlist::trie::node::TrieNode;

/// Walks the present children of a node in alphabet order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < ALPHABET.len() {
            let child = self.node.get_child(self.idx);
            self.idx += 1;
            if child.is_some() {
                return child;
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}

/// Level-order walk of a subtree, starting with its root.
pub(crate) struct BreadthFirst<'a> {
    queue: VecDeque<&'a TrieNode>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node);
        Some(node)
    }
}

impl TrieNode {
    pub(crate) fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst { queue: VecDeque::from(vec![self]) }
    }
}
