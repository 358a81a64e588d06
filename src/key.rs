//! Scanner for desktop-entry style lines (`Key[locale]=value`).
//!
//! Lines are raw bytes: legacy-encoded files are scanned the same way as
//! UTF-8 ones. Keys and locales are matched against the
//! [`VALID`](crate::VALID) table, so they are always ASCII. Values are
//! returned raw, without unescaping.

use thiserror::Error;

use crate::charclass::{is_key_char, is_locale_char};

/// A parsed `Key[locale]=value` line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLine<'a> {
    pub key: &'a str,
    pub locale: Option<&'a str>,
    pub value: &'a [u8],
}

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// Group header, without the brackets.
    Section(&'a str),
    Entry(KeyLine<'a>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Empty key name")]
    EmptyKey,
    #[error("Unterminated locale specification in key")]
    UnterminatedLocale,
    #[error("Invalid characters in locale name")]
    InvalidLocaleChars,
    #[error("Empty locale name")]
    EmptyLocale,
    #[error("Invalid characters in key name")]
    InvalidKeyChars,
    #[error("No '=' in key/value pair")]
    MissingEquals,
    #[error("Invalid syntax for section header")]
    InvalidSection,
    #[error("Invalid characters in section name")]
    InvalidSectionChars,
}

/// The line ends at the first `\n`; anything after it is ignored.
fn first_line(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b'\n') {
        Some(end) => &line[..end],
        None => line,
    }
}

fn skip_spaces(bytes: &[u8], mut p: usize) -> usize {
    while p < bytes.len() && bytes[p] == b' ' {
        p += 1;
    }
    p
}

// Callers only pass spans made of table-checked or printable ASCII bytes.
fn ascii(bytes: &[u8], err: KeyError) -> Result<&str, KeyError> {
    std::str::from_utf8(bytes).map_err(|_| err)
}

/// Split a key/value line into its key, optional locale and raw value.
pub fn parse_key_line(line: &[u8]) -> Result<KeyLine<'_>, KeyError> {
    let bytes = first_line(line);
    let end = bytes.len();

    let mut p = 0;
    while p < end && is_key_char(bytes[p]) {
        p += 1;
    }
    if p == 0 {
        return Err(KeyError::EmptyKey);
    }
    let key = ascii(&bytes[..p], KeyError::InvalidKeyChars)?;

    let mut locale = None;
    if p < end && bytes[p] == b'[' {
        p += 1;
        let start = p;
        while p < end && is_locale_char(bytes[p]) {
            p += 1;
        }
        if p == end {
            return Err(KeyError::UnterminatedLocale);
        }
        if bytes[p] != b']' {
            return Err(KeyError::InvalidLocaleChars);
        }
        if p == start {
            return Err(KeyError::EmptyLocale);
        }
        locale = Some(ascii(&bytes[start..p], KeyError::InvalidLocaleChars)?);
        p += 1;
    }

    p = skip_spaces(bytes, p);
    if p < end && bytes[p] != b'=' {
        return Err(KeyError::InvalidKeyChars);
    }
    if p == end {
        return Err(KeyError::MissingEquals);
    }

    p = skip_spaces(bytes, p + 1);
    Ok(KeyLine {
        key,
        locale,
        value: &bytes[p..],
    })
}

/// ASCII whitespace as C `isspace` sees it, vertical tab included.
fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| b.is_ascii_whitespace() || b == 0x0b)
}

fn is_valid_section_name(name: &[u8]) -> bool {
    name.iter()
        .all(|&b| (0x20..0x7f).contains(&b) || b == b'\t')
}

/// Classify a single line as blank, comment, section header or entry.
pub fn classify_line(line: &[u8]) -> Result<LineKind<'_>, KeyError> {
    let line = first_line(line);
    if line.first() == Some(&b'[') {
        if line.len() <= 2 || line.last() != Some(&b']') {
            return Err(KeyError::InvalidSection);
        }
        let name = &line[1..line.len() - 1];
        if !is_valid_section_name(name) {
            return Err(KeyError::InvalidSectionChars);
        }
        return Ok(LineKind::Section(ascii(name, KeyError::InvalidSectionChars)?));
    }
    if is_blank(line) {
        return Ok(LineKind::Blank);
    }
    if line.first() == Some(&b'#') {
        return Ok(LineKind::Comment);
    }
    parse_key_line(line).map(LineKind::Entry)
}
