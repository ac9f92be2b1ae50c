//! `enum` declarations, single-line `enum E {A, B}` or one member per line
//! with optional `##` member docs.

use super::scan;
use crate::cursor::LineCursor;
use crate::error::ParseErrorKind;
use crate::model::EnumDoc;

pub fn parse_enum(
    line: &str,
    cursor: &mut LineCursor<'_>,
    description: Option<String>,
) -> Result<EnumDoc, ParseErrorKind> {
    let decl = scan::strip_comment(line).trim_end();
    let second = decl
        .split_whitespace()
        .nth(1)
        .ok_or(ParseErrorKind::Enum)?;
    // `enum State{` and anonymous `enum {` both reach here.
    let name = second.split('{').next().unwrap_or_default();
    if !name.chars().all(scan::is_ident_char) {
        return Err(ParseErrorKind::Enum);
    }

    let mut info = EnumDoc {
        name: name.to_string(),
        description,
        values: Vec::new(),
    };

    if decl.ends_with('}') {
        let open = decl.find('{').ok_or(ParseErrorKind::Enum)?;
        let close = scan::matching_close(decl, open).ok_or(ParseErrorKind::Enum)?;
        insert_members(&mut info, &decl[open + 1..close], None);
        return Ok(info);
    }

    // Members sharing the header line: `enum E { A,`
    if let Some(open) = decl.find('{') {
        insert_members(&mut info, &decl[open + 1..], None);
    }

    // `##` lines above a member document that member.
    let mut pending: Vec<String> = Vec::new();
    loop {
        let line = cursor.read_line().ok_or(ParseErrorKind::UnterminatedEnum)?;
        if scan::is_blank(line) {
            continue;
        }

        let (code, doc) = match line.split_once(scan::DOC_MARKER) {
            Some((code, doc)) => (code, Some(doc.trim().to_string())),
            None => (scan::strip_comment(line), None),
        };
        let code = code.trim();
        if code.ends_with('}') {
            return Ok(info);
        }
        if code == "{" || code.is_empty() {
            pending.extend(doc);
            continue;
        }
        let above = (!pending.is_empty()).then(|| pending.join("\n"));
        pending.clear();
        insert_members(&mut info, code, doc.or(above));
    }
}

/// Comma-separated members; a line doc belongs to the last member on it.
fn insert_members(info: &mut EnumDoc, text: &str, doc: Option<String>) {
    let members: Vec<&str> = scan::split_top_level(text, ',')
        .into_iter()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect();
    let Some((last, rest)) = members.split_last() else {
        return;
    };
    for member in rest {
        info.insert(*member, None);
    }
    info.insert(*last, doc);
}
