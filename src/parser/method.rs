//! `func` declarations, possibly with a parameter list spread over
//! several lines.

use super::args::{self, SignatureEnd};
use super::scan;
use crate::cursor::LineCursor;
use crate::error::ParseErrorKind;
use crate::model::MethodDoc;

pub fn parse_method(
    line: &str,
    cursor: &mut LineCursor<'_>,
    description: Option<String>,
) -> Result<MethodDoc, ParseErrorKind> {
    if !scan::strip_comment(line).contains('(') {
        return Err(ParseErrorKind::Method);
    }
    let signature = args::collect_signature(line, cursor, SignatureEnd::Colon)
        .ok_or(ParseErrorKind::UnterminatedSignature)?;
    let name = signature.name().ok_or(ParseErrorKind::Method)?;

    Ok(MethodDoc {
        name: name.to_string(),
        description,
        args: signature.args(),
        return_type: signature.return_type(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArgDoc;

    #[test]
    fn simple() {
        let mut cursor = LineCursor::new("\tpass\n");
        let m = parse_method("func jump():", &mut cursor, Some("Jumps.".to_string())).unwrap();
        assert_eq!(m.name, "jump");
        assert!(m.args.is_empty());
        assert!(m.return_type.is_none());
        assert_eq!(m.description.as_deref(), Some("Jumps."));
        assert_eq!(cursor.read_line(), Some("\tpass"));
    }

    #[test]
    fn typed_args_and_return() {
        let mut cursor = LineCursor::new("");
        let m = parse_method(
            "func move(dir: Vector2, speed := 1.0) -> bool:",
            &mut cursor,
            None,
        )
        .unwrap();
        assert_eq!(
            m.args,
            vec![
                ArgDoc {
                    name: "dir".to_string(),
                    type_hint: Some("Vector2".to_string()),
                    default: None,
                },
                ArgDoc {
                    name: "speed".to_string(),
                    type_hint: None,
                    default: Some("1.0".to_string()),
                },
            ]
        );
        assert_eq!(m.return_type.as_deref(), Some("bool"));
    }

    #[test]
    fn multi_line_parameters() {
        let mut cursor = LineCursor::new("\ta: int,\n\tb: String = \"x\"\n) -> void:\n\tpass\n");
        let m = parse_method("func f(", &mut cursor, None).unwrap();
        assert_eq!(m.args.len(), 2);
        assert_eq!(m.args[1].default.as_deref(), Some("\"x\""));
        assert_eq!(m.return_type.as_deref(), Some("void"));
        assert_eq!(cursor.read_line(), Some("\tpass"));
    }

    #[test]
    fn missing_paren() {
        let mut cursor = LineCursor::new("func g():\n");
        assert_eq!(
            parse_method("func broken:", &mut cursor, None),
            Err(ParseErrorKind::Method)
        );
    }

    #[test]
    fn unterminated() {
        let mut cursor = LineCursor::new("\ta,\n\tb\n");
        assert_eq!(
            parse_method("func f(", &mut cursor, None),
            Err(ParseErrorKind::UnterminatedSignature)
        );
    }
}
