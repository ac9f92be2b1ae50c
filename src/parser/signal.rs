//! `signal` declarations.

use super::args::{self, SignatureEnd};
use super::scan;
use crate::cursor::LineCursor;
use crate::error::ParseErrorKind;
use crate::model::SignalDoc;

pub fn parse_signal(
    line: &str,
    cursor: &mut LineCursor<'_>,
    description: Option<String>,
) -> Result<SignalDoc, ParseErrorKind> {
    let decl = scan::strip_comment(line);
    if !decl.contains('(') {
        let name = decl
            .strip_prefix("signal")
            .and_then(scan::take_ident)
            .filter(|(_, rest)| rest.trim().is_empty())
            .map(|(name, _)| name)
            .ok_or(ParseErrorKind::Signal)?;
        return Ok(SignalDoc {
            name: name.to_string(),
            description,
            args: Vec::new(),
        });
    }

    let signature = args::collect_signature(line, cursor, SignatureEnd::CloseParen)
        .ok_or(ParseErrorKind::UnterminatedSignature)?;
    let name = signature.name().ok_or(ParseErrorKind::Signal)?;

    Ok(SignalDoc {
        name: name.to_string(),
        description,
        args: signature.args(),
    })
}
