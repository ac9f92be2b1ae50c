//! Parameter lists shared by `func` and `signal`.

use super::scan;
use crate::cursor::LineCursor;
use crate::model::ArgDoc;

/// Where a signature ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureEnd {
    /// `func f(...) -> T:` is closed by a top-level colon after the list.
    Colon,
    /// `signal s(...)` is closed by the parameter list itself.
    CloseParen,
}

/// Concatenated text of a signature that may span several lines.
#[derive(Debug)]
pub struct Signature {
    pub text: String,
}

/// Gather `header` and as many continuation lines as needed to close the
/// signature. Continuation lines are trimmed before joining. On success the
/// cursor is left on the first line after the signature.
///
/// Returns `None` when the input ends first.
pub fn collect_signature(
    header: &str,
    cursor: &mut LineCursor<'_>,
    end: SignatureEnd,
) -> Option<Signature> {
    let mut text = scan::strip_comment(header).trim_end().to_string();
    while !is_closed(&text, end) {
        let line = cursor.read_line()?;
        text.push_str(scan::strip_comment(line).trim());
    }
    Some(Signature { text })
}

fn is_closed(text: &str, end: SignatureEnd) -> bool {
    let Some(open) = text.find('(') else {
        return false;
    };
    let Some(close) = scan::matching_close(text, open) else {
        return false;
    };
    match end {
        SignatureEnd::CloseParen => true,
        SignatureEnd::Colon => scan::find_top_level(&text[close + 1..], ':').is_some(),
    }
}

impl Signature {
    /// Byte range of the text between the first `(` and its match.
    fn list_bounds(&self) -> Option<(usize, usize)> {
        let open = self.text.find('(')?;
        let close = scan::matching_close(&self.text, open)?;
        Some((open, close))
    }

    /// Name between the declaration keyword and `(`.
    pub fn name(&self) -> Option<&str> {
        let (open, _) = self.list_bounds()?;
        let head = self.text[..open].trim();
        let (_, name) = head.split_once(char::is_whitespace)?;
        let name = name.trim();
        (!name.is_empty() && name.chars().all(scan::is_ident_char)).then_some(name)
    }

    pub fn args(&self) -> Vec<ArgDoc> {
        match self.list_bounds() {
            Some((open, close)) => parse_arg_list(&self.text[open + 1..close]),
            None => Vec::new(),
        }
    }

    /// Text between `->` and the closing colon, if the signature declares one.
    pub fn return_type(&self) -> Option<String> {
        let (_, close) = self.list_bounds()?;
        let tail = &self.text[close + 1..];
        let colon = scan::find_top_level(tail, ':').unwrap_or(tail.len());
        let arrow = tail[..colon].find("->")?;
        let ty = tail[arrow + 2..colon].trim();
        (!ty.is_empty()).then(|| ty.to_string())
    }
}

/// Parse the inside of a parameter list: `a, b: int, c := 2, d: float = 1.0`.
pub fn parse_arg_list(list: &str) -> Vec<ArgDoc> {
    scan::split_top_level(list, ',')
        .into_iter()
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .map(parse_arg)
        .collect()
}

fn parse_arg(arg: &str) -> ArgDoc {
    let (decl, default) = match scan::find_top_level(arg, '=') {
        Some(eq) => (&arg[..eq], Some(arg[eq + 1..].trim().to_string())),
        None => (arg, None),
    };
    // `name := value` leaves a bare `:` behind: inferred, not declared.
    let (name, type_hint) = match decl.split_once(':') {
        Some((name, ty)) => {
            let ty = ty.trim();
            (name, (!ty.is_empty()).then(|| ty.to_string()))
        }
        None => (decl, None),
    };
    ArgDoc {
        name: name.trim().to_string(),
        type_hint,
        default: default.filter(|d| !d.is_empty()),
    }
}
