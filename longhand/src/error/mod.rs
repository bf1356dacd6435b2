//! Error types and reporting

use std::fmt;
use std::io::Write;

use crate::ast::Span;
use serde::Serialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LonghandError>;

/// Why a phrase was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Empty phrase or a word that is not part of the vocabulary
    Syntax,
    /// The value does not fit the requested integer width
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("invalid syntax"),
            Self::Range => f.write_str("value out of range"),
        }
    }
}

/// Public entry point that raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    #[serde(rename = "parse_longhand64")]
    ParseLonghand64,
    #[serde(rename = "parse_longhand32")]
    ParseLonghand32,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ParseLonghand64 => "parse_longhand64",
            Self::ParseLonghand32 => "parse_longhand32",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rejected longhand phrase.
///
/// `field` is the offending word for syntax errors and the whole phrase for
/// range errors (no single word is at fault there). `span` locates `field`
/// inside the phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}: {field:?} in longhand::{operation}")]
pub struct LonghandError {
    pub field: String,
    pub kind: ErrorKind,
    pub operation: Operation,
    pub span: Span,
}

impl LonghandError {
    pub fn syntax(operation: Operation, field: impl Into<String>, span: Span) -> Self {
        Self {
            field: field.into(),
            kind: ErrorKind::Syntax,
            operation,
            span,
        }
    }

    pub fn range(operation: Operation, phrase: &str) -> Self {
        Self {
            field: phrase.to_string(),
            kind: ErrorKind::Range,
            operation,
            span: Span::whole(phrase),
        }
    }

    /// Re-tag the error with the operation that is surfacing it
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    pub fn is_range(&self) -> bool {
        self.kind == ErrorKind::Range
    }

    fn label(&self) -> &'static str {
        match self.kind {
            ErrorKind::Syntax => "not a number word",
            ErrorKind::Range => "does not fit the target integer",
        }
    }
}

/// Write an ariadne report for `error` against the phrase it came from
pub fn write_report<W: Write>(
    name: &str,
    phrase: &str,
    error: &LonghandError,
    color: bool,
    mut out: W,
) -> std::io::Result<()> {
    use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

    // Nothing to underline in a blank phrase
    if phrase.trim().is_empty() {
        return writeln!(out, "Error: {error}");
    }

    let range: std::ops::Range<usize> = error.span.into();
    let config = Config::default()
        .with_color(color)
        .with_index_type(IndexType::Byte);

    Report::build(ReportKind::Error, (name, range.clone()))
        .with_config(config)
        .with_message(error.to_string())
        .with_label(
            Label::new((name, range))
                .with_message(error.label())
                .with_color(Color::Red),
        )
        .finish()
        .write((name, Source::from(phrase)), out)
}

/// Report error with ariadne on stderr
pub fn report_error(name: &str, phrase: &str, error: &LonghandError, color: bool) {
    if let Err(io_err) = write_report(name, phrase, error, color, std::io::stderr()) {
        tracing::warn!("failed to render report: {}", io_err);
        eprintln!("Error: {error}");
    }
}
