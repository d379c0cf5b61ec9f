use std::fmt;

use crate::error::{Error, Result};

/// Number of key slots, one per lowercase ASCII letter.
pub const KEY_COUNT: usize = 26;

/// A single-letter option key in `'a'..='z'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u8);

impl Key {
    pub fn new(c: char) -> Result<Self> {
        if c.is_ascii_lowercase() {
            Ok(Key(c as u8 - b'a'))
        } else {
            Err(Error::InvalidKey(c))
        }
    }

    /// Slot index in `0..KEY_COUNT`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Every key, `a` through `z`.
    pub fn all() -> impl Iterator<Item = Key> {
        (0..KEY_COUNT as u8).map(Key)
    }
}

impl TryFrom<char> for Key {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Key::new(c)
    }
}

impl From<Key> for char {
    fn from(key: Key) -> char {
        key.as_char()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_letters_are_keys() {
        let a = Key::new('a').unwrap();
        let z = Key::new('z').unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(z.index(), KEY_COUNT - 1);
        assert_eq!(z.as_char(), 'z');
    }

    #[test]
    fn test_out_of_range_keys() {
        for c in ['A', 'Z', '`', '{', '0', '-', ' ', 'é'] {
            assert_eq!(Key::new(c), Err(Error::InvalidKey(c)));
        }
    }

    #[test]
    fn test_all_covers_alphabet() {
        let letters: String = Key::all().map(char::from).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_try_from_and_display() {
        let key = Key::try_from('q').unwrap();
        assert_eq!(key.to_string(), "q");
        assert!(Key::try_from('Q').is_err());
    }
}
