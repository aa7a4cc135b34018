//! Source locations for nodes and diagnostics.

use std::fmt;

/// Where a node starts in the model source, plus its length in bytes.
///
/// Nodes built programmatically (tests, synthesized call arguments) use
/// [`Span::default`], which renders as `0:0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a span from a line, column, and length.
    #[inline]
    pub const fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_line_col() {
        assert_eq!(Span::new(4, 12, 3).to_string(), "4:12");
        assert_eq!(Span::default().to_string(), "0:0");
    }
}
