use crate::wordlist::trie::TrieError;

pub trait Index {
    fn add(&mut self, word: &str) -> Result<(), TrieError>;
    fn contains(&self, word: &str) -> Result<bool, TrieError>;

    /// Adds words in order, stopping at the first one rejected.
    fn add_all<'a, I>(&mut self, items: I) -> Result<(), TrieError>
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().try_for_each(|x| self.add(x))
    }
}
