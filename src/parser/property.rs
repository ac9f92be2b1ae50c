//! `var` declarations.
//!
//! ```text
//! var name [: Type] [= default | := default] [: set = f, get = g]
//! ```
//! followed by optional indented `get:` / `set(value):` blocks.

use super::scan;
use crate::cursor::LineCursor;
use crate::error::ParseErrorKind;
use crate::model::{placeholder, PropertyDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_INLINE_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bset\s*=\s*\w+").unwrap());

static RE_INLINE_GET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bget\s*=\s*\w+").unwrap());

/// `: set =` / `: get =` right after the name is an accessor list, not a type.
static RE_ACCESSOR_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[gs]et\s*=").unwrap());

pub fn parse_property(
    line: &str,
    cursor: &mut LineCursor<'_>,
    description: Option<String>,
    deferred: bool,
) -> Result<PropertyDoc, ParseErrorKind> {
    let decl = scan::strip_comment(line).trim_end();
    let after_kw = decl
        .strip_prefix("var")
        .ok_or(ParseErrorKind::Property)?;
    let (name, mut rest) = scan::take_ident(after_kw).ok_or(ParseErrorKind::Property)?;

    let mut info = PropertyDoc {
        name: name.to_string(),
        description,
        ..Default::default()
    };

    rest = rest.trim_start();
    if let Some(after_colon) = rest.strip_prefix(':').filter(|r| !r.starts_with('=')) {
        let after_colon = after_colon.trim_start();
        if !RE_ACCESSOR_START.is_match(after_colon) {
            if let Some((ty, tail)) = take_type(after_colon) {
                info.type_hint = Some(ty.to_string());
                rest = tail.trim_start();
            }
        }
    }

    let assigned = rest
        .strip_prefix(":=")
        .or_else(|| rest.strip_prefix('='));
    if let Some(value) = assigned {
        let end = scan::find_top_level(value, ':').unwrap_or(value.len());
        let default = value[..end].trim();
        if default.is_empty() {
            return Err(ParseErrorKind::Property);
        }
        info.default = Some(normalize_default(default));
        rest = value[end..].trim_start();
    }

    if let Some(accessors) = rest.strip_prefix(':') {
        mark_inline_accessors(&mut info, accessors);
    }

    if deferred {
        info.default = None;
    }

    scan_accessor_block(&mut info, cursor);
    Ok(info)
}

/// A type annotation: `int`, `Node2D`, `Array[int]`, `Dictionary[String, int]`,
/// `MyClass.Inner`.
fn take_type(text: &str) -> Option<(&str, &str)> {
    let mut end = 0;
    loop {
        let (ident, _) = scan::take_ident(&text[end..])?;
        end += ident.len();
        match text[end..].chars().next() {
            Some('.') => end += 1,
            Some('[') => {
                end = scan::matching_close(text, end)? + 1;
                break;
            }
            _ => break,
        }
    }
    Some((&text[..end], &text[end..]))
}

/// Collapse container literals to a fixed placeholder.
pub fn normalize_default(default: &str) -> String {
    let container = match default.chars().next() {
        Some('{') => Some((placeholder::EMPTY_MAP, placeholder::MAP)),
        Some('[') => Some((placeholder::EMPTY_LIST, placeholder::LIST)),
        _ => None,
    };
    let Some((empty, filled)) = container else {
        return default.to_string();
    };
    match scan::matching_close(default, 0) {
        Some(close) if default[1..close].trim().is_empty() => empty.to_string(),
        _ => filled.to_string(),
    }
}

fn mark_inline_accessors(info: &mut PropertyDoc, text: &str) {
    if RE_INLINE_SET.is_match(text) {
        info.has_setter = true;
    }
    if RE_INLINE_GET.is_match(text) {
        info.has_getter = true;
    }
}

/// Indented lines after the declaration may define accessors. Blank lines
/// do not end the block; the first unindented line does and is handed back.
fn scan_accessor_block(info: &mut PropertyDoc, cursor: &mut LineCursor<'_>) {
    loop {
        let mark = cursor.checkpoint();
        let Some(line) = cursor.read_line() else {
            break;
        };
        if !line.is_empty() && !line.starts_with(char::is_whitespace) {
            cursor.restore(mark);
            break;
        }

        mark_inline_accessors(info, line);
        let trimmed = line.trim_start();
        if scan::starts_with_keyword(trimmed, "set") {
            info.has_setter = true;
        } else if scan::starts_with_keyword(trimmed, "get") {
            info.has_getter = true;
        }
    }
}
