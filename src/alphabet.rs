use crate::wordlist::trie::TrieError;

pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();

/// Offset of `a` into a node's child array.
pub fn get_idx(a: char) -> Result<usize, TrieError> {
    if a.is_ascii_uppercase() {
        Ok((a as u8 - b'A') as usize)
    } else {
        Err(TrieError::InvalidCharacter { character: a, position: 0 })
    }
}

pub fn get_letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_uppercase().chars().filter(|x| x.is_ascii() && ALPHABET.contains(&(*x as u8))).collect()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, get_letter, normalize, ALPHABET};
    use crate::wordlist::trie::TrieError;

    #[test]
    fn maps_letters_to_offsets() {
        assert_eq!(get_idx('A').unwrap(), 0);
        assert_eq!(get_idx('Z').unwrap(), ALPHABET.len() - 1);
        (0..ALPHABET.len()).for_each(|i| assert_eq!(get_idx(get_letter(i)).unwrap(), i));
    }

    #[test]
    fn rejects_letters_outside_alphabet() {
        for c in ['a', ' ', '@', '[', '1', 'É'] {
            assert!(matches!(get_idx(c), Err(TrieError::InvalidCharacter { character, .. }) if character == c));
        }
    }

    #[test]
    fn normalizes_case_and_strips() {
        assert_eq!(normalize("aardvark's"), "AARDVARKS");
        assert_eq!(normalize("Zürich"), "ZRICH");
        assert_eq!(normalize("  "), "");
    }
}
