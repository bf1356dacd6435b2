//! Classified words of a longhand phrase

mod span;

pub use span::*;

use serde::{Deserialize, Serialize};

use crate::tables;

/// What a single word of a phrase means to the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// zero..nineteen or a bare tens word
    Numeral(i64),
    /// hundred, thousand, ... quintillion and their abbreviations
    Magnitude(i64),
    /// "negative"; flips the sign of the whole phrase
    Negative,
    /// "and"; contributes nothing
    And,
}

impl Term {
    /// Classify an already lowercased word.
    ///
    /// Returns `None` for anything that is not a known numeral, magnitude,
    /// or one of the two literal words "and" / "negative".
    pub fn classify(word: &str) -> Option<Term> {
        if let Some(n) = tables::numeral(word) {
            return Some(Term::Numeral(n));
        }
        if let Some(m) = tables::magnitude(word) {
            return Some(Term::Magnitude(m));
        }
        match word {
            "negative" => Some(Term::Negative),
            "and" => Some(Term::And),
            _ => None,
        }
    }
}
