//! Small quote- and bracket-aware scanning helpers shared by the
//! declaration parsers.

/// Doc-comment prefix.
pub const DOC_MARKER: &str = "##";

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_doc_comment(line: &str) -> bool {
    line.trim_start().starts_with(DOC_MARKER)
}

/// Text of a doc-comment line with the marker and surrounding whitespace
/// removed.
pub fn doc_text(line: &str) -> &str {
    let t = line.trim_start();
    t.strip_prefix(DOC_MARKER).unwrap_or(t).trim()
}

/// True when `line` begins (without indentation) with `keyword` as a whole
/// word.
pub fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => !rest.starts_with(is_ident_char),
        None => false,
    }
}

pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a leading identifier off `text` (after leading whitespace).
pub fn take_ident(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(text.len(), |(i, _)| i);
    if end == 0 || text.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some((&text[..end], &text[end..]))
}

/// Walks `text` yielding `(byte index, char, depth)` for every character
/// outside string literals. Depth counts open `(`, `[` and `{` before the
/// character; closing brackets report the depth they close to.
fn structural_chars(text: &str) -> impl Iterator<Item = (usize, char, usize)> + '_ {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    text.char_indices().filter_map(move |(i, c)| {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            return None;
        }
        match c {
            '"' | '\'' => {
                quote = Some(c);
                None
            }
            '(' | '[' | '{' => {
                depth += 1;
                Some((i, c, depth - 1))
            }
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                Some((i, c, depth))
            }
            _ => Some((i, c, depth)),
        }
    })
}

/// Drop a trailing `#` comment that is not inside a string literal.
pub fn strip_comment(line: &str) -> &str {
    match structural_chars(line).find(|&(_, c, _)| c == '#') {
        Some((i, _, _)) => &line[..i],
        None => line,
    }
}

/// Byte index of the first `ch` outside strings and brackets.
pub fn find_top_level(text: &str, ch: char) -> Option<usize> {
    structural_chars(text)
        .find(|&(_, c, depth)| c == ch && depth == 0)
        .map(|(i, _, _)| i)
}

/// Byte index of the bracket closing the one opened at `open`.
pub fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut chars = structural_chars(text).skip_while(|&(i, _, _)| i < open);
    let (_, _, base) = chars
        .next()
        .filter(|&(i, c, _)| i == open && matches!(c, '(' | '[' | '{'))?;
    chars
        .find(|&(_, c, depth)| matches!(c, ')' | ']' | '}') && depth == base)
        .map(|(i, _, _)| i)
}

/// Split on `sep` where it occurs outside strings and brackets.
pub fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c, depth) in structural_chars(text) {
        if c == sep && depth == 0 {
            parts.push(&text[start..i]);
            start = i + sep.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}
