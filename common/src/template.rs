//! Message templates with `{column}` placeholders.
//!
//! A placeholder is the exact token `{` + column name + `}`. Only names of the
//! dataset's current columns are substituted; any other braces are copied
//! through untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Record;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

fn token(column: &str) -> String {
    format!("{{{}}}", column)
}

/// Expands `template` against one record.
///
/// The template is scanned once from left to right and substituted values are
/// never rescanned, so a value that itself looks like `{other}` is emitted
/// literally and the result does not depend on column order. When two column
/// tokens start at the same position the longer one wins.
pub fn expand(template: &str, record: &Record, columns: &[String]) -> String {
    let mut tokens: Vec<(String, &str)> = columns
        .iter()
        .map(|c| (token(c), record.get(c).unwrap_or("")))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match tokens.iter().find(|(t, _)| tail.starts_with(t.as_str())) {
            Some((t, value)) => {
                out.push_str(value);
                rest = &tail[t.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholders that do not name one of `columns`; they would be sent literally.
pub fn unknown_placeholders(template: &str, columns: &[String]) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|name| !columns.contains(name))
        .collect()
}

/// Inserts `{column}` at a textarea cursor position.
///
/// Browsers report `selectionStart` in UTF-16 code units; the returned cursor is
/// in the same unit and sits right after the inserted token.
pub fn insert_placeholder(template: &str, column: &str, cursor_utf16: u32) -> (String, u32) {
    let byte_pos = utf16_to_byte_idx(template, cursor_utf16 as usize);
    let placeholder = token(column);

    let mut text = template.to_string();
    text.insert_str(byte_pos, &placeholder);
    let cursor = byte_to_utf16_idx(&text, byte_pos + placeholder.len());
    (text, cursor)
}

/// UTF-8 byte index of a UTF-16 position. Positions past the end, or in the
/// middle of a surrogate pair, snap forward to the next character boundary.
fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx].encode_utf16().count() as u32
}
