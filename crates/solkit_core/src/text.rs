//! Text span and range types for source location tracking.
//!
//! Nodes loaded from a compiler AST keep the byte range they were built
//! from so diagnostics can point back into the original source.

use std::fmt;
use std::str::FromStr;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    /// Whether this span is empty (zero-length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span contains the given position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A text range with start and end positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// The length of this range in bytes.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    /// Whether this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Convert to a TextSpan.
    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

impl From<TextSpan> for TextRange {
    fn from(span: TextSpan) -> Self {
        TextRange::new(span.start, span.end())
    }
}

/// Error returned when a compiler source location string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceLocationError {
    #[error("source location `{0}` must have the form `start:length:file`")]
    Shape(String),
    #[error("source location `{text}` has a non-numeric {field}")]
    NotANumber { text: String, field: &'static str },
}

/// A compiler source location of the form `start:length:fileIndex`.
///
/// The file index is `-1` when the node has no source file.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SourceLocation {
    pub span: TextSpan,
    pub file_index: Option<u32>,
}

impl SourceLocation {
    /// The location as a node range.
    pub fn range(&self) -> TextRange {
        self.span.into()
    }
}

impl FromStr for SourceLocation {
    type Err = SourceLocationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parts = text.split(':');
        let (Some(start), Some(length), Some(file), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SourceLocationError::Shape(text.to_string()));
        };
        let number = |value: &str, field: &'static str| {
            value.parse::<u32>().map_err(|_| SourceLocationError::NotANumber {
                text: text.to_string(),
                field,
            })
        };
        let start = number(start, "start")?;
        let length = number(length, "length")?;
        let file_index = match file.parse::<i64>() {
            Ok(index) if index < 0 => None,
            Ok(index) => Some(u32::try_from(index).map_err(|_| SourceLocationError::NotANumber {
                text: text.to_string(),
                field: "file index",
            })?),
            Err(_) => {
                return Err(SourceLocationError::NotANumber {
                    text: text.to_string(),
                    field: "file index",
                })
            }
        };
        Ok(Self {
            span: TextSpan::new(start, length),
            file_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
    }

    #[test]
    fn test_range_span_conversion() {
        let range = TextRange::new(4, 9);
        let span: TextSpan = range.into();
        assert_eq!(span, TextSpan::new(4, 5));
        assert_eq!(TextRange::from(span), range);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_parse_source_location() {
        let loc: SourceLocation = "120:34:0".parse().unwrap();
        assert_eq!(loc.span, TextSpan::new(120, 34));
        assert_eq!(loc.file_index, Some(0));
        assert_eq!(loc.range(), TextRange::new(120, 154));
    }

    #[test]
    fn test_parse_source_location_without_file() {
        let loc: SourceLocation = "0:0:-1".parse().unwrap();
        assert_eq!(loc.file_index, None);
        assert!(loc.span.is_empty());
    }

    #[test]
    fn test_parse_source_location_errors() {
        assert!(matches!(
            "12:4".parse::<SourceLocation>(),
            Err(SourceLocationError::Shape(_))
        ));
        assert!(matches!(
            "a:4:0".parse::<SourceLocation>(),
            Err(SourceLocationError::NotANumber { field: "start", .. })
        ));
    }
}
