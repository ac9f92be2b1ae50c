//! BBCode-style doc markup → markdown.
//!
//! Only the small tag set Godot doc comments use is recognized; anything
//! else passes through untouched.

use regex::Regex;
use std::sync::LazyLock;

static RE_IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[img[^\]]*\](.*?)\[/img\]").unwrap());

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[url=([^\]]*)\](.*?)\[/url\]").unwrap());

/// Tags whose open and close forms map to the same literal.
const SIMPLE_TAGS: &[(&str, &str)] = &[
    ("b", "**"),
    ("i", "_"),
    ("s", "~~"),
    ("code", "`"),
    ("codeblock", "```"),
    ("br", "\n"),
    ("url", ""),
];

/// Convert doc-comment markup to markdown.
pub fn to_markdown(text: &str) -> String {
    let text = RE_IMG.replace_all(text, "![]($1)");
    let mut text = RE_URL.replace_all(&text, "[$2]($1)").into_owned();

    for (tag, md) in SIMPLE_TAGS {
        text = text
            .replace(&format!("[{tag}]"), md)
            .replace(&format!("[/{tag}]"), md);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        let text = "Moves the [player] by (x, y) * 2. See [Node2D]!";
        assert_eq!(to_markdown(text), text);
    }

    #[test]
    fn image() {
        assert_eq!(
            to_markdown("Icon: [img]res://icon.svg[/img]"),
            "Icon: ![](res://icon.svg)"
        );
        assert_eq!(
            to_markdown("[img width=32]a.png[/img]"),
            "![](a.png)"
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            to_markdown("Read [url=https://godotengine.org]the docs[/url] first"),
            "Read [the docs](https://godotengine.org) first"
        );
    }

    #[test]
    fn two_links_on_one_line() {
        assert_eq!(
            to_markdown("[url=a]A[/url] and [url=b]B[/url]"),
            "[A](a) and [B](b)"
        );
    }

    #[test]
    fn simple_tags() {
        assert_eq!(to_markdown("[b]bold[/b]"), "**bold**");
        assert_eq!(to_markdown("[i]it[/i]"), "_it_");
        assert_eq!(to_markdown("[s]gone[/s]"), "~~gone~~");
        assert_eq!(to_markdown("[code]x[/code]"), "`x`");
        assert_eq!(to_markdown("[codeblock]x[/codeblock]"), "```x```");
        assert_eq!(to_markdown("a[br]b"), "a\nb");
        assert_eq!(to_markdown("[url]https://x.y[/url]"), "https://x.y");
    }
}
