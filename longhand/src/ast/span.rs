//! Source location tracking

use serde::{Deserialize, Serialize};

/// A byte range into the phrase being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering the whole of `phrase`
    pub fn whole(phrase: &str) -> Self {
        Self::new(0, phrase.len())
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_whole() {
        assert_eq!(Span::whole("seven thousand"), Span::new(0, 14));
        assert!(Span::whole("").is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(42, 99);
        assert_eq!(format!("{}", span), "42..99");
    }

    #[test]
    fn test_span_display_zero() {
        let span = Span::new(0, 0);
        assert_eq!(format!("{}", span), "0..0");
    }

    #[test]
    fn test_span_to_range() {
        let span = Span::new(5, 15);
        let range: std::ops::Range<usize> = span.into();
        assert_eq!(range, 5..15);
    }

    #[test]
    fn test_range_to_span() {
        let range = 10..20usize;
        let span: Span = range.into();
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
    }

    #[test]
    fn test_span_serde_roundtrip() {
        let span = Span::new(3, 8);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start":3,"end":8}"#);
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
