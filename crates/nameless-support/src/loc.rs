use std::fmt::{self, Display, Formatter};

/// A point in a piece of source text.
///
/// Offsets are absolute byte offsets into the input; `line_start` is the
/// offset of the first character of the line containing the point.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub struct Position {
    /// The name of the source file, empty for anonymous input.
    pub file: String,
    /// The line number.
    pub line: usize,
    /// The offset of the first character of the line.
    pub line_start: usize,
    /// The absolute offset of the point.
    pub offset: usize,
}

impl Position {
    pub fn new(
        file: impl Into<String>,
        line: usize,
        line_start: usize,
        offset: usize,
    ) -> Position {
        Position {
            file: file.into(),
            line,
            line_start,
            offset,
        }
    }

    /// The column, counted from the start of the line.
    pub fn column(&self) -> usize {
        self.offset - self.line_start
    }
}

/// A range of source text, or nothing at all.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub enum Location {
    Unknown,
    Span(Position, Position),
}

impl Location {
    pub fn span(begin: Position, end: Position) -> Location {
        Location::Span(begin, end)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Location::Unknown)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => f.write_str("unknown position"),
            Location::Span(begin, end) => {
                // Both columns are measured from the start of the line the
                // span begins on, even when the span ends on a later line.
                let begin_column = begin.offset - begin.line_start;
                let end_column = end.offset - begin.line_start;
                if begin.file.is_empty() {
                    // Anonymous input reports the line number one lower.
                    write!(
                        f,
                        "line {}, characters {}-{}",
                        begin.line - 1,
                        begin_column,
                        end_column
                    )
                } else {
                    write!(
                        f,
                        "file \"{}\", line {}, characters {}-{}",
                        begin.file, begin.line, begin_column, end_column
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_position() {
        assert_eq!(Location::Unknown.to_string(), "unknown position");
        assert!(!Location::Unknown.is_known());
    }

    #[test]
    fn test_span_with_file() {
        let begin = Position::new("demo.lam", 3, 100, 107);
        let end = Position::new("demo.lam", 3, 100, 112);
        assert_eq!(
            Location::span(begin, end).to_string(),
            "file \"demo.lam\", line 3, characters 7-12"
        );
    }

    #[test]
    fn test_span_without_file() {
        let begin = Position::new("", 3, 100, 107);
        let end = Position::new("", 3, 100, 112);
        assert_eq!(
            Location::span(begin, end).to_string(),
            "line 2, characters 7-12"
        );
    }

    #[test]
    fn test_multi_line_span_uses_begin_line_start() {
        // The end point sits on a later line; its column is still reported
        // relative to the line the span begins on.
        let begin = Position::new("demo.lam", 2, 10, 14);
        let end = Position::new("demo.lam", 4, 40, 43);
        assert_eq!(
            Location::span(begin, end).to_string(),
            "file \"demo.lam\", line 2, characters 4-33"
        );
    }

    #[test]
    fn test_column() {
        assert_eq!(Position::new("x", 1, 20, 27).column(), 7);
    }
}
