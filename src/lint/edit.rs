//! Textual surgery for auto-fixes.
//!
//! Fixes operate on the raw source text, never on a re-serialized document,
//! so comments, ordering, and formatting outside the removed span survive.
//! A field's textual extent is its key line plus every following line that
//! is blank or indented deeper than the key line, excluding trailing blank
//! lines before the next sibling; this covers scalar values on the key line
//! as well as quoted, folded, and nested multi-line values.
//!
//! All removal functions are idempotent and fail conservatively: when the
//! target key is absent, or cannot be located unambiguously, the input text
//! is returned unchanged byte-for-byte.

use std::sync::LazyLock;

use regex::Regex;

/// A `key: |` / `key: >` line introducing a block scalar, whose indented
/// body must not be scanned for keys.
static BLOCK_SCALAR_INTRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[ \t]*[|>][0-9]*[+-]?[ \t]*(#.*)?$").unwrap());

/// Remove the block belonging to a top-level `key`.
///
/// Top-level keys are recognized at column zero only. If the key is absent,
/// or more than one column-zero line matches it, the text is returned
/// unchanged.
pub fn remove_top_level_key(source: &str, key: &str) -> String {
    let Some(re) = key_line_regex(key, true) else {
        return source.to_string();
    };

    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let matches: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| re.is_match(line.trim_end()))
        .map(|(i, _)| i)
        .collect();

    // Absent or ambiguous: leave the text alone.
    let start = match matches.as_slice() {
        [only] => *only,
        _ => return source.to_string(),
    };
    let end = block_end(&lines, start, 0);

    let mut result = String::with_capacity(source.len());
    for (i, line) in lines.iter().enumerate() {
        if i < start || i >= end {
            result.push_str(line);
        }
    }
    result
}

/// Remove every indented occurrence of `key` together with its value block.
///
/// Lines inside block scalar bodies are never treated as keys. Returns the
/// text unchanged when no occurrence exists.
pub fn remove_nested_key(source: &str, key: &str) -> String {
    let Some(re) = key_line_regex(key, false) else {
        return source.to_string();
    };

    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let mut keep = vec![true; lines.len()];
    let mut changed = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            i += 1;
            continue;
        }
        if re.is_match(line.trim_end()) {
            let end = block_end(&lines, i, indent_of(line));
            for slot in &mut keep[i..end] {
                *slot = false;
            }
            changed = true;
            i = end;
            continue;
        }
        if BLOCK_SCALAR_INTRO.is_match(line.trim_end()) {
            i = block_end(&lines, i, indent_of(line));
            continue;
        }
        i += 1;
    }

    if !changed {
        return source.to_string();
    }

    lines
        .iter()
        .zip(&keep)
        .filter(|(_, keep)| **keep)
        .map(|(line, _)| *line)
        .collect()
}

/// Build the matcher for a `key:` line, plain or quoted, at column zero
/// (`top_level`) or at any deeper indentation.
fn key_line_regex(key: &str, top_level: bool) -> Option<Regex> {
    let escaped = regex::escape(key);
    let prefix = if top_level { "" } else { "[ \\t]+" };
    Regex::new(&format!(
        r#"^{prefix}(?:{escaped}|"{escaped}"|'{escaped}')[ \t]*:([ \t].*)?$"#
    ))
    .ok()
}

/// One past the last line belonging to the block whose key line is
/// `lines[start]` at `key_indent`. Continuation lines are those indented
/// deeper than the key; interior blank lines are included, trailing blank
/// lines before the next sibling are not.
fn block_end(lines: &[&str], start: usize, key_indent: usize) -> usize {
    let mut cursor = start + 1;
    let mut consumed = start + 1;
    while cursor < lines.len() {
        let line = lines[cursor];
        if is_blank(line) {
            cursor += 1;
            continue;
        }
        if indent_of(line) > key_indent {
            cursor += 1;
            consumed = cursor;
        } else {
            break;
        }
    }
    consumed
}

fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
