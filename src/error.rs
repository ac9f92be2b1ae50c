//! Error types for parsing, registration, and hierarchy resolution.

use thiserror::Error;

/// What was wrong with a line the parser could not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Header,
    Property,
    Method,
    Signal,
    Enum,
    UnterminatedSignature,
    UnterminatedEnum,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseErrorKind::Header => "malformed class header",
            ParseErrorKind::Property => "malformed property declaration",
            ParseErrorKind::Method => "malformed method declaration",
            ParseErrorKind::Signal => "malformed signal declaration",
            ParseErrorKind::Enum => "malformed enum declaration",
            ParseErrorKind::UnterminatedSignature => "signature not closed before end of file",
            ParseErrorKind::UnterminatedEnum => "enum not closed before end of file",
        };
        f.write_str(msg)
    }
}

/// Fatal failure while parsing one script. No partial document survives it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}:{line_no}: {kind}: `{line}`")]
pub struct ParseError {
    pub path: String,
    /// 1-based line number of the offending line.
    pub line_no: usize,
    pub line: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(path: &str, line_no: usize, line: &str, kind: ParseErrorKind) -> Self {
        Self {
            path: path.to_string(),
            line_no,
            line: line.trim_end().to_string(),
            kind,
        }
    }
}

/// Failure while placing classes in the output tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cyclic class hierarchy for {class}: {}", .chain.join(" -> "))]
    Cycle { class: String, chain: Vec<String> },
}

/// Raised by the registry under the strict collision policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("class name {name} declared by both {previous} and {current}")]
    Collision {
        name: String,
        previous: String,
        current: String,
    },
}
