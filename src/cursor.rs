//! Resumable forward scan over a script's lines.
//!
//! Sub-parsers read ahead until they hit a line that does not belong to
//! them, then hand it back by restoring a [`Mark`] taken before the read.

/// Opaque position inside a [`LineCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
        }
    }

    /// Next line without advancing, `None` at end of input.
    pub fn peek_line(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Next line, advancing past it. `None` at end of input.
    pub fn read_line(&mut self) -> Option<&'a str> {
        let line = self.peek_line()?;
        self.pos += 1;
        Some(line)
    }

    pub fn checkpoint(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn restore(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.lines.len());
        self.pos = mark.0;
    }

    /// 1-based number of the most recently read line (0 before any read).
    pub fn line_no(&self) -> usize {
        self.pos
    }
}
