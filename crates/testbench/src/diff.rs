// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented diffs for assertion failure messages.

use similar::{ChangeTag, TextDiff};
use std::fmt::Debug;

/// Longest rendering of a value kept in a failure summary line
const SUMMARY_WIDTH: usize = 60;

/// Marker line for a final line whose newline exists on one side only
const NO_NEWLINE: &str = "\\ No newline at end of file";

/// Text form of a value for diffing.
///
/// String-like values (whose `Debug` form is a single string literal) are
/// used as their unescaped text, so multi-line text diffs line by line.
/// Anything else is pretty-printed with `{:#?}`.
pub fn text_form<T: Debug + ?Sized>(value: &T) -> String {
    unquote(&format!("{:?}", value)).unwrap_or_else(|| format!("{:#?}", value))
}

/// One-line `left != right` summary from the compact `Debug` forms
pub fn summary<T: Debug + ?Sized>(left: &T, right: &T) -> String {
    format!(
        "{} != {}",
        shorten(&format!("{:?}", left)),
        shorten(&format!("{:?}", right))
    )
}

fn shorten(text: &str) -> String {
    if text.chars().count() <= SUMMARY_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(SUMMARY_WIDTH).collect();
    short.push_str("...");
    short
}

/// Decode a `Debug`-escaped string literal; `None` if `literal` is not one
fn unquote(literal: &str) -> Option<String> {
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => text.push(unescape(&mut chars)?),
            c => text.push(c),
        }
    }
    Some(text)
}

fn unescape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    match chars.next()? {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'u' => {
            if chars.next()? != '{' {
                return None;
            }
            let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
            char::from_u32(u32::from_str_radix(&hex, 16).ok()?)
        }
        _ => None,
    }
}

/// Unified-style diff of two texts, one entry per output line.
///
/// Hunk headers (`@@ -a,b +c,d @@`) count as lines; changed lines are
/// prefixed with `-`/`+` and context lines with a space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diff {
    lines: Vec<String>,
}

impl Diff {
    pub fn new(old: &str, new: &str, context: usize) -> Self {
        let mark_missing_newline = old.ends_with('\n') != new.ends_with('\n');
        let diff = TextDiff::from_lines(old, new);
        let mut unified = diff.unified_diff();
        unified.context_radius(context);

        let mut lines = Vec::new();
        for hunk in unified.iter_hunks() {
            lines.push(hunk.header().to_string());
            for change in hunk.iter_changes() {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                let value = change.value();
                let (text, newline) = match value.strip_suffix('\n') {
                    Some(text) => (text, true),
                    None => (value, false),
                };
                match text.strip_suffix('\r') {
                    Some(text) => lines.push(format!("{}{}\\r", sign, text)),
                    None => lines.push(format!("{}{}", sign, text)),
                }
                if !newline && mark_missing_newline {
                    lines.push(NO_NEWLINE.to_string());
                }
            }
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `DIFF:` section with at most `max_lines` lines; the header notes
    /// ` (first N lines)` when the diff was cut.
    pub fn report(&self, max_lines: usize) -> String {
        let limit = if self.lines.len() > max_lines {
            format!(" (first {} lines)", max_lines)
        } else {
            String::new()
        };
        let shown: Vec<&str> = self
            .lines
            .iter()
            .take(max_lines)
            .map(String::as_str)
            .collect();
        format!("DIFF{}:\n{}", limit, shown.join("\n"))
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
