//! # Properties Text
//!
//! An owned key/value map together with a parser and writer for the
//! line-oriented `key=value` format used by `Color.properties`.
//!
//! ## Format
//!
//! ```text
//! # comment
//! ! also a comment
//! Color.background = #112233
//! Color.text: #eeeeee
//! Color.long.key  value continued \
//!                 onto the next line
//! Color.escaped = tab\there \u00e9
//! ```
//!
//! - Lines end with `\n`, `\r` or `\r\n`. Leading whitespace is skipped.
//! - A line whose first non-whitespace character is `#` or `!` is a comment.
//! - An odd number of trailing backslashes joins the next line, minus its
//!   leading whitespace. Comment lines never continue.
//! - The key ends at the first unescaped `=`, `:` or whitespace.
//!   Whitespace around the separator is dropped, trailing whitespace is kept.
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`, and `\c` for any other `c`.

use std::io::{self, Write};

use indexmap::IndexMap;

use crate::error::PropertiesError;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// An owned mapping from property key to property value.
///
/// Inserting an existing key replaces its value (last write wins) but keeps
/// the key's original position in iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: IndexMap<String, String>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties text into a new store.
    ///
    /// ```rust
    /// use colorprops_core::properties::PropertyStore;
    ///
    /// let store = PropertyStore::parse("# theme\nColor.background=#112233\n").unwrap();
    /// assert_eq!(store.get("Color.background"), Some("#112233"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PropertiesError> {
        let mut store = Self::new();
        store.load_str(text)?;
        Ok(store)
    }

    /// Parse properties text and merge it into this store.
    ///
    /// Nothing is inserted if the text is malformed.
    pub fn load_str(&mut self, text: &str) -> Result<(), PropertiesError> {
        let mut parsed = Vec::new();
        for (line, logical) in logical_lines(text) {
            let (raw_key, raw_value) = split_key_value(&logical);
            parsed.push((unescape(raw_key, line)?, unescape(raw_value, line)?));
        }
        self.entries.extend(parsed);
        Ok(())
    }

    /// Decode raw file contents and merge them into this store.
    ///
    /// UTF-8 is tried first; anything else is read as ISO-8859-1. Unlike
    /// `java.util.Properties`, which always reads ISO-8859-1, a Latin-1 file
    /// whose bytes also form valid UTF-8 (`\xc3\xa9`) decodes as UTF-8.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), PropertiesError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.load_str(text),
            Err(_) => {
                let text: String = bytes.iter().map(|&b| char::from(b)).collect();
                self.load_str(&text)
            },
        }
    }

    /// Merge every entry of `other` into this store, overwriting duplicates.
    pub fn extend_from(&mut self, other: &PropertyStore) {
        self.entries.extend(
            other
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
    }

    /// Set a property, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Write the store as properties text, one `key=value` line per entry.
    ///
    /// The output parses back into an equal store.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (key, value) in &self.entries {
            writeln!(writer, "{}={}", escape(key, true), escape(value, false))?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Split text on `\n`, `\r` and `\r\n`.
fn natural_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            },
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            },
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Join continuation lines and drop comments and blanks.
///
/// Each logical line is paired with the 1-based number of its first line.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, natural) in natural_lines(text).into_iter().enumerate() {
        let content = natural.trim_start_matches(WHITESPACE);
        let (start, mut line) = match pending.take() {
            Some(open) => open,
            None => {
                if content.is_empty() || content.starts_with(['#', '!']) {
                    continue;
                }
                (index + 1, String::new())
            },
        };

        line.push_str(content);
        let trailing = content.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            line.pop();
            pending = Some((start, line));
        } else {
            out.push((start, line));
        }
    }

    if let Some((start, line)) = pending {
        if !line.is_empty() {
            out.push((start, line));
        }
    }
    out
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            },
            ' ' | '\t' | '\x0c' => {
                key_end = i;
                value_start = i + 1;
                break;
            },
            _ => {},
        }
    }

    let mut value = line[value_start..].trim_start_matches(WHITESPACE);
    if !has_separator {
        if let Some(rest) = value.strip_prefix(['=', ':']) {
            value = rest.trim_start_matches(WHITESPACE);
        }
    }
    (&line[..key_end], value)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    // Built as UTF-16 so `\uD83C\uDFA8` style surrogate pairs combine.
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut buf = [0u16; 2];
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        let decoded = if c == '\\' {
            match chars.next() {
                Some('t') => '\t',
                Some('n') => '\n',
                Some('r') => '\r',
                Some('f') => '\x0c',
                Some('u') => {
                    let mut code: u16 = 0;
                    for _ in 0..4 {
                        let digit = chars
                            .next()
                            .and_then(|d| d.to_digit(16))
                            .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                        code = code * 16 + digit as u16;
                    }
                    units.push(code);
                    continue;
                },
                Some(other) => other,
                None => break,
            }
        } else {
            c
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    Ok(String::from_utf16_lossy(&units))
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            },
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => out.push(c),
        }
    }
    out
}
