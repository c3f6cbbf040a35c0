//! Line-oriented dotenv parsing.
//!
//! Responsibilities:
//! - Turn raw dotenv text into a flat key/value mapping.
//! - Expand `\n` escapes inside fully double-quoted values.
//! - Strip one layer of surrounding quotes and trim whitespace.
//!
//! Does NOT handle:
//! - File access (see loader).
//! - Variable interpolation between entries.
//!
//! Invariants:
//! - Lines that do not match the `KEY=VALUE` grammar are skipped, never
//!   reported as errors.
//! - When a key appears on multiple lines, the last occurrence wins.
//! - Escape expansion happens before quote stripping; quote detection
//!   sees the raw value with its trailing whitespace intact.

use std::collections::HashMap;

/// Flat mapping of environment variable names to values.
pub type EnvMap = HashMap<String, String>;

const QUOTES: [char; 2] = ['\'', '"'];

/// Parse dotenv text into an [`EnvMap`].
///
/// The grammar is forgiving: blank lines, comments, and malformed lines
/// contribute nothing. Duplicate keys within the same text resolve to the
/// value on the last matching line.
///
/// # Examples
///
/// ```
/// let vars = multienv::parse("A=1\n# comment\nB=\"two\"\n");
/// assert_eq!(vars["A"], "1");
/// assert_eq!(vars["B"], "two");
/// ```
pub fn parse(text: &str) -> EnvMap {
    let mut vars = EnvMap::new();
    for line in text.split('\n') {
        if let Some((key, value)) = parse_line(line) {
            vars.insert(key.to_owned(), value);
        }
    }
    vars
}

/// Match one line against `KEY=VALUE`: optional leading whitespace, a key
/// of one or more `[A-Za-z0-9_.-]` characters, optional whitespace, `=`,
/// optional whitespace, then the rest of the line as the raw value.
fn parse_line(line: &str) -> Option<(&str, String)> {
    let line = line.trim_start();
    let key_len = line
        .find(|c: char| !is_key_char(c))
        .unwrap_or(line.len());
    if key_len == 0 {
        return None;
    }
    let (key, rest) = line.split_at(key_len);
    let raw = rest.trim_start().strip_prefix('=')?.trim_start();
    Some((key, unquote(raw)))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Post-process a raw value: expand `\n` escapes when the value is fully
/// double-quoted, then strip at most one leading and one trailing quote
/// character and trim surrounding whitespace.
fn unquote(raw: &str) -> String {
    let expanded;
    let value = if !raw.is_empty() && raw.starts_with('"') && raw.ends_with('"') {
        expanded = raw.replace("\\n", "\n");
        expanded.as_str()
    } else {
        raw
    };
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    let value = value.strip_suffix(QUOTES).unwrap_or(value);
    value.trim().to_owned()
}
