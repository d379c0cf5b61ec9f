pub mod token;

use std::ops::Range;

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::key::{KEY_COUNT, Key};
use crate::usage;
use token::Token;

/// Exit status carried by usage errors unless configured otherwise.
pub const DEFAULT_EXIT_CODE: i32 = -1;

#[derive(Debug, Clone, Default)]
struct Slot {
    /// Set once the key is declared.
    description: Option<String>,
    /// Indices into the argument vector of the values bound to the key. Set
    /// once the key was seen during parsing.
    binding: Option<Range<usize>>,
}

/// Parser for single-letter options.
///
/// Keys are declared with [`ArgParser::add_key`], the argument vector is
/// scanned once with [`ArgParser::parse`], and the result is read back with
/// the query methods. `args[0]` is the program name and is never parsed.
#[derive(Debug, Clone)]
pub struct ArgParser {
    args: Vec<String>,
    slots: [Slot; KEY_COUNT],
    seen: IndexSet<Key>,
    exit_code: i32,
}

impl ArgParser {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgParser {
            args: args.into_iter().map(Into::into).collect(),
            slots: Default::default(),
            seen: IndexSet::new(),
            exit_code: DEFAULT_EXIT_CODE,
        }
    }

    /// Sets the exit status carried by usage errors from [`ArgParser::parse`].
    pub fn usage_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn add_key(&mut self, key: char, description: &str) -> Result<()> {
        if description.is_empty() {
            return Err(Error::MissingDescription);
        }
        let key = Key::new(key)?;

        log::debug!("Declared key '{key}': {description}");
        self.slots[key.index()] = Slot {
            description: Some(description.to_string()),
            binding: None,
        };
        Ok(())
    }

    /// Scans `args[1..]` and binds values to the declared keys.
    ///
    /// Nothing is committed unless the whole vector parses, so on error the
    /// parser still holds the bindings it had before the call.
    pub fn parse(&mut self) -> Result<()> {
        let mut bindings: [Option<Range<usize>>; KEY_COUNT] = Default::default();
        let mut seen = IndexSet::new();

        let mut i = 1;
        while i < self.args.len() {
            match Token::classify(&self.args[i]) {
                Token::Single(c) => {
                    let key = self.declared(c)?;
                    let start = i + 1;
                    let end = self.args[start..]
                        .iter()
                        .position(|arg| Token::is_key(arg))
                        .map_or(self.args.len(), |offset| start + offset);

                    for (n, value) in self.args[start..end].iter().enumerate() {
                        log::trace!("Add arg({}) {value:?} for key '{key}'", start + n);
                    }
                    log::debug!("Key '{key}' set with {} args", end - start);

                    bindings[key.index()] = Some(start..end);
                    seen.insert(key);
                    i = end;
                }
                Token::Combined(letters) => {
                    let keys = letters
                        .chars()
                        .map(|c| self.declared(c))
                        .collect::<Result<Vec<_>>>()?;

                    for key in keys {
                        log::debug!("Key '{key}' set by combined token {:?}", self.args[i]);
                        bindings[key.index()] = Some(i + 1..i + 1);
                        seen.insert(key);
                    }
                    i += 1;
                }
                Token::Bare | Token::Value => {
                    log::debug!("Expected a key at arg({i}), found {:?}", self.args[i]);
                    return Err(self.usage_error());
                }
            }
        }

        for (slot, binding) in self.slots.iter_mut().zip(bindings) {
            slot.binding = binding;
        }
        self.seen = seen;
        Ok(())
    }

    /// Resolves a key letter met during parsing. Anything that is not a
    /// declared key is an input error.
    fn declared(&self, c: char) -> Result<Key> {
        match Key::new(c) {
            Ok(key) if self.slots[key.index()].description.is_some() => Ok(key),
            _ => {
                log::debug!("Unknown key {c:?}");
                Err(self.usage_error())
            }
        }
    }

    fn slot(&self, key: char) -> Result<&Slot> {
        let key = Key::new(key)?;
        let slot = &self.slots[key.index()];
        if slot.description.is_none() {
            return Err(Error::UndeclaredKey(key.as_char()));
        }
        Ok(slot)
    }

    pub fn is_key_set(&self, key: char) -> Result<bool> {
        Ok(self.slot(key)?.binding.is_some())
    }

    /// The values bound to `key`, in argument order. Empty when the key was
    /// not present or was given in combined form.
    pub fn key_args(&self, key: char) -> Result<&[String]> {
        Ok(match &self.slot(key)?.binding {
            Some(range) => &self.args[range.clone()],
            None => &[][..],
        })
    }

    pub fn get_key_arg(&self, key: char, index: usize) -> Result<Option<&str>> {
        Ok(self.key_args(key)?.get(index).map(String::as_str))
    }

    pub fn get_key_args(&self, key: char) -> Result<Vec<&str>> {
        Ok(self.key_args(key)?.iter().map(String::as_str).collect())
    }

    pub fn for_each_key_arg<F>(&self, key: char, mut f: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        for value in self.key_args(key)? {
            f(value);
        }
        Ok(())
    }

    /// Declared keys with their descriptions, `a` to `z`.
    pub fn declared_keys(&self) -> impl Iterator<Item = (Key, &str)> + '_ {
        Key::all().filter_map(|key| {
            self.slots[key.index()]
                .description
                .as_deref()
                .map(|description| (key, description))
        })
    }

    /// Keys set by the last parse, in the order they first appeared.
    pub fn present_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.seen
            .iter()
            .copied()
            .filter(|key| self.slots[key.index()].binding.is_some())
    }

    pub fn program(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }

    pub fn usage(&self) -> String {
        usage::render(self.program(), self.declared_keys())
    }

    pub fn usage_error(&self) -> Error {
        Error::Usage {
            text: self.usage(),
            exit_code: self.exit_code,
        }
    }

    /// Prints the usage banner to stdout and exits with `exit_code`.
    pub fn print_usage(&self, exit_code: i32) -> ! {
        Error::Usage {
            text: self.usage(),
            exit_code,
        }
        .exit()
    }
}
