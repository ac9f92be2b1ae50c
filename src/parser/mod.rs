//! GDScript doc parser: single forward pass over one script.
//!
//! The header is read once, then each declaration keyword is routed to its
//! sub-parser together with the `##` lines collected just above it.

pub mod args;
pub mod enumeration;
pub mod header;
pub mod method;
pub mod property;
pub mod scan;
pub mod signal;

use crate::cursor::LineCursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::markup;
use crate::model::ClassDocument;
use tracing::debug;

/// Annotation that defers a property's initialization to `_ready`.
const ONREADY: &str = "onready";

/// Parse one script. `path` is recorded in the document and in errors.
pub fn parse(path: &str, source: &str) -> Result<ClassDocument, ParseError> {
    let mut cursor = LineCursor::new(source);
    let mut doc = ClassDocument::new(path);

    header::parse_header(&mut cursor, &mut doc)?;
    parse_declarations(&mut cursor, &mut doc)?;

    debug!(
        path,
        name = doc.name.as_deref().unwrap_or("-"),
        signals = doc.signals.len(),
        enums = doc.enums.len(),
        properties = doc.properties.len(),
        methods = doc.methods.len(),
        "parsed script"
    );
    Ok(doc)
}

fn parse_declarations(
    cursor: &mut LineCursor<'_>,
    doc: &mut ClassDocument,
) -> Result<(), ParseError> {
    let mut pending: Vec<&str> = Vec::new();

    while let Some(line) = cursor.read_line() {
        if scan::is_blank(line) {
            continue;
        }
        if scan::is_doc_comment(line) {
            pending.push(scan::doc_text(line));
            continue;
        }

        let mut decl = line;
        let mut deferred = false;
        if line.starts_with('@') {
            let (annotations, rest) = split_annotations(line);
            // A lone `@tool` / `@export_group(...)` line: nothing to attach.
            if scan::is_blank(scan::strip_comment(rest)) {
                continue;
            }
            deferred = annotations.contains(&ONREADY);
            decl = rest;
        }

        let line_no = cursor.line_no();
        let description = take_description(&mut pending);
        let failed = |kind: ParseErrorKind| ParseError::new(&doc.file_path, line_no, line, kind);

        if scan::starts_with_keyword(decl, "signal") {
            let signal = signal::parse_signal(decl, cursor, description).map_err(failed)?;
            doc.signals.push(signal);
        } else if scan::starts_with_keyword(decl, "enum") {
            let info = enumeration::parse_enum(decl, cursor, description).map_err(failed)?;
            doc.enums.push(info);
        } else if scan::starts_with_keyword(decl, "var") {
            let prop =
                property::parse_property(decl, cursor, description, deferred).map_err(failed)?;
            doc.properties.push(prop);
        } else if scan::starts_with_keyword(decl, "func") {
            let method = method::parse_method(decl, cursor, description).map_err(failed)?;
            doc.methods.push(method);
        }
    }

    Ok(())
}

/// Markup-converted text of the pending doc lines; always empties the buffer.
fn take_description(pending: &mut Vec<&str>) -> Option<String> {
    let text = pending.join("\n");
    pending.clear();
    let text = text.trim();
    (!text.is_empty()).then(|| markup::to_markdown(text))
}

/// Split leading `@name` / `@name(args)` tokens off a line. Names are
/// returned without the `@`.
fn split_annotations(line: &str) -> (Vec<&str>, &str) {
    let mut names = Vec::new();
    let mut rest = line.trim_start();
    while let Some(after_at) = rest.strip_prefix('@') {
        let Some((name, mut tail)) = scan::take_ident(after_at) else {
            break;
        };
        if tail.starts_with('(') {
            match scan::matching_close(tail, 0) {
                Some(close) => tail = &tail[close + 1..],
                None => tail = "",
            }
        }
        names.push(name);
        rest = tail.trim_start();
    }
    (names, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: &str = r#"class_name Player
extends CharacterBody2D
## The player character.
##
## Handles [b]movement[/b] and health.

## Emitted when health reaches zero.
signal died
signal hit(amount: int, from: Node)

## Movement state.
enum State {IDLE, RUN}

## Speed in px/s.
@export var speed: float = 200.0
@onready var sprite: Sprite2D = $Sprite2D
var inventory: Array = []
var health := 3:
	set(value):
		health = value

@tool
## Moves the player.
func move(dir: Vector2,
		delta: float) -> void:
	## not a doc for anything
	position += dir * speed * delta

func _ready():
	pass
"#;

    #[test]
    fn full_script() {
        let doc = parse("player.gd", PLAYER).unwrap();
        assert_eq!(doc.file_path, "player.gd");
        assert_eq!(doc.name.as_deref(), Some("Player"));
        assert_eq!(doc.extends, "CharacterBody2D");
        assert_eq!(doc.summary.as_deref(), Some("The player character."));
        assert_eq!(doc.description.as_deref(), Some("Handles **movement** and health."));

        assert_eq!(doc.signals.len(), 2);
        assert_eq!(doc.signals[0].name, "died");
        assert_eq!(
            doc.signals[0].description.as_deref(),
            Some("Emitted when health reaches zero.")
        );
        assert!(doc.signals[1].description.is_none());
        assert_eq!(doc.signals[1].args.len(), 2);

        assert_eq!(doc.enums.len(), 1);
        assert_eq!(doc.enums[0].description.as_deref(), Some("Movement state."));

        let props: Vec<_> = doc.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(props, ["speed", "sprite", "inventory", "health"]);
        assert_eq!(doc.properties[0].description.as_deref(), Some("Speed in px/s."));
        assert_eq!(doc.properties[0].default.as_deref(), Some("200.0"));
        assert!(doc.properties[1].default.is_none());
        assert_eq!(doc.properties[1].type_hint.as_deref(), Some("Sprite2D"));
        assert_eq!(doc.properties[2].default.as_deref(), Some("[]"));
        assert!(doc.properties[3].has_setter);
        assert!(!doc.properties[3].has_getter);

        assert_eq!(doc.methods.len(), 2);
        assert_eq!(doc.methods[0].name, "move");
        assert_eq!(doc.methods[0].description.as_deref(), Some("Moves the player."));
        assert_eq!(doc.methods[0].args.len(), 2);
        assert_eq!(doc.methods[0].return_type.as_deref(), Some("void"));
        assert_eq!(doc.methods[1].name, "_ready");
        assert!(doc.methods[1].description.is_none());
    }

    #[test]
    fn docstring_cleared_by_unrecognized_line() {
        let src = "extends Node\n\n## orphan\nconst X = 1\nvar y\n";
        let doc = parse("a.gd", src).unwrap();
        assert!(doc.properties[0].description.is_none());
    }

    #[test]
    fn no_header_comment_means_no_summary() {
        let doc = parse("a.gd", "extends Node\nvar a\n## doc\nfunc f():\n\tpass\n").unwrap();
        assert!(doc.summary.is_none());
        assert!(doc.description.is_none());
        assert_eq!(doc.methods[0].description.as_deref(), Some("doc"));
    }

    #[test]
    fn indented_declarations_are_ignored() {
        let src = "extends Node\nfunc f():\n\tvar local = 1\n\tfor i in 3:\n\t\tpass\n";
        let doc = parse("a.gd", src).unwrap();
        assert!(doc.properties.is_empty());
        assert_eq!(doc.methods.len(), 1);
    }

    #[test]
    fn parse_error_reports_line() {
        let err = parse("bad.gd", "extends Node\n\nvar = 2\n").unwrap_err();
        assert_eq!(err.path, "bad.gd");
        assert_eq!(err.line_no, 3);
        assert_eq!(err.line, "var = 2");
        assert_eq!(err.kind, ParseErrorKind::Property);
    }

    #[test]
    fn annotation_forms() {
        assert_eq!(split_annotations("@onready var a"), (vec!["onready"], "var a"));
        assert_eq!(
            split_annotations("@export_range(0, 10) var b"),
            (vec!["export_range"], "var b")
        );
        assert_eq!(split_annotations("@tool"), (vec!["tool"], ""));
    }
}
