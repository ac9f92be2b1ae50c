//! Leading `class_name` / `extends` block and the class doc comment.

use super::scan;
use crate::cursor::LineCursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::markup;
use crate::model::ClassDocument;

/// Consume the header and fill in name, base class, summary and
/// description.
///
/// Lines are consumed until the `extends` line has been seen and a line
/// that is not a doc comment follows; that line is handed back. A script
/// without `extends` therefore has its whole body read as header.
pub fn parse_header(
    cursor: &mut LineCursor<'_>,
    doc: &mut ClassDocument,
) -> Result<(), ParseError> {
    let mut raw: Vec<&str> = Vec::new();
    let mut base_found = false;

    loop {
        let mark = cursor.checkpoint();
        let Some(line) = cursor.read_line() else {
            break;
        };
        let is_doc = scan::is_doc_comment(line);

        // `extends X` followed by `class_name Y` is common in Godot 4.
        let late_name = doc.name.is_none() && scan::starts_with_keyword(line, "class_name");
        if base_found && !is_doc && !late_name {
            cursor.restore(mark);
            break;
        }
        if scan::is_blank(line) {
            continue;
        }

        let mut rest = line;
        if scan::starts_with_keyword(line, "class_name") {
            let after = &line["class_name".len()..];
            let malformed = || {
                ParseError::new(&doc.file_path, cursor.line_no(), line, ParseErrorKind::Header)
            };
            let (name, tail) = scan::take_ident(after).ok_or_else(malformed)?;
            doc.name = Some(name.to_string());
            rest = tail.trim_start();
        }

        if scan::starts_with_keyword(rest, "extends") {
            let base = scan::strip_comment(&rest["extends".len()..]).trim();
            if base.is_empty() {
                return Err(ParseError::new(
                    &doc.file_path,
                    cursor.line_no(),
                    line,
                    ParseErrorKind::Header,
                ));
            }
            doc.extends = base.to_string();
            base_found = true;
        }

        if is_doc {
            raw.push(scan::doc_text(line));
        }
    }

    split_description(&raw, doc);
    Ok(())
}

/// First paragraph is the summary, everything after the first empty doc
/// line is the description.
fn split_description(raw: &[&str], doc: &mut ClassDocument) {
    if raw.iter().all(|l| l.is_empty()) {
        return;
    }

    let non_empty = |text: String| (!text.trim().is_empty()).then(|| text.trim().to_string());

    match raw.iter().position(|l| l.is_empty()) {
        None => doc.summary = non_empty(markup::to_markdown(&raw.join("\n"))),
        Some(split) => {
            doc.summary = non_empty(markup::to_markdown(&raw[..split].join("\n")));
            doc.description = non_empty(markup::to_markdown(&raw[split + 1..].join("\n")));
        }
    }
}
