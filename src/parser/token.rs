/// Marker every key token starts with.
pub(crate) const KEY_MARKER: char = '-';

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// `-k`, may be followed by values.
    Single(char),
    /// `-klm`, the letters after the marker. Never takes values.
    Combined(&'a str),
    /// A lone `-` with no key letter.
    Bare,
    /// Anything not starting with the marker.
    Value,
}

impl<'a> Token<'a> {
    pub fn classify(arg: &'a str) -> Token<'a> {
        let Some(keys) = arg.strip_prefix(KEY_MARKER) else {
            return Token::Value;
        };

        let mut chars = keys.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Token::Bare,
            (Some(key), None) => Token::Single(key),
            (Some(_), Some(_)) => Token::Combined(keys),
        }
    }

    pub fn is_key(arg: &str) -> bool {
        arg.starts_with(KEY_MARKER)
    }
}
