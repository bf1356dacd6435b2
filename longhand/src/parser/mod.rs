//! Longhand accumulation
//!
//! Words are classified one at a time and folded into a running value.
//! A *group* is everything accumulated into `sum` since the last flush; a
//! flush happens after any magnitude other than "hundred" and at the end of
//! the phrase.

use serde::{Deserialize, Serialize};

use crate::ast::{Span, Term};
use crate::error::{LonghandError, Operation, Result};
use crate::lexer::tokenize;
use crate::tables::HUNDRED;


/// Integer width a phrase is parsed into
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    I32,
    #[default]
    I64,
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Width::I32 => f.write_str("i32"),
            Width::I64 => f.write_str("i64"),
        }
    }
}

/// Per-call fold state. Returns `None` from any step that overflows.
#[derive(Debug)]
struct Accumulator {
    /// Value of the current group
    sum: i64,
    /// Flushed groups. Wider than the result so that `i64::MIN`'s magnitude
    /// can be held before the sign is applied.
    total: i128,
    /// Last numeral folded into `sum`, 0 after a magnitude
    prev: i64,
    sign: i64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            sum: 0,
            total: 0,
            prev: 0,
            sign: 1,
        }
    }

    fn fold(&mut self, term: Term) -> Option<()> {
        match term {
            Term::Numeral(n) => self.numeral(n),
            Term::Magnitude(m) => self.magnitude(m),
            Term::Negative => {
                self.sign = -1;
                Some(())
            }
            Term::And => Some(()),
        }
    }

    /// Adjacent numerals concatenate as decimal digit groups: two words of
    /// 10 or more shift by two digits ("nineteen twenty" is 1920), and a
    /// repeated numeral shifts by one ("one one" is 11). Anything else adds.
    fn numeral(&mut self, n: i64) -> Option<()> {
        if self.prev / 10 > 0 && n / 10 > 0 {
            self.sum = self.sum.checked_mul(100)?;
        } else if self.prev == n {
            self.sum = self.sum.checked_mul(10)?;
        }
        self.sum = self.sum.checked_add(n)?;
        self.prev = n;
        Some(())
    }

    fn magnitude(&mut self, m: i64) -> Option<()> {
        if self.sum == 0 {
            self.sum = m;
        } else {
            self.sum = self.sum.checked_mul(m)?;
        }
        if m != HUNDRED {
            self.flush()?;
        }
        self.prev = 0;
        Some(())
    }

    fn flush(&mut self) -> Option<()> {
        self.total = self.total.checked_add(i128::from(self.sum))?;
        self.sum = 0;
        Some(())
    }

    fn finish(mut self) -> Option<i64> {
        self.flush()?;
        let signed = self.total.checked_mul(i128::from(self.sign))?;
        i64::try_from(signed).ok()
    }
}

/// Parse a longhand phrase into a 64-bit signed integer.
///
/// Accepts the words zero through nineteen, the tens twenty through ninety,
/// the magnitudes hundred through quintillion (plus the abbreviations k,
/// mil, m, bil, b, tril, t, quad and quin), the connective "and" and the
/// sign marker "negative". Words are separated by whitespace or `-` and
/// matched case-insensitively.
///
/// The full `i64` range is supported:
///
/// ```
/// use longhand::parse_longhand64;
///
/// assert_eq!(parse_longhand64("seven thousand two hundred thirty-one"), Ok(7231));
/// assert_eq!(parse_longhand64("negative five k"), Ok(-5000));
/// assert!(parse_longhand64("three hunded").is_err());
/// ```
pub fn parse_longhand64(phrase: &str) -> Result<i64> {
    const OP: Operation = Operation::ParseLonghand64;

    let tokens = tokenize(phrase)?;
    if tokens.is_empty() {
        tracing::debug!("rejected empty phrase {:?}", phrase);
        return Err(LonghandError::syntax(OP, phrase, Span::whole(phrase)));
    }

    let mut acc = Accumulator::new();
    for (token, span) in &tokens {
        let word = token.as_str();
        let Some(term) = Term::classify(word) else {
            tracing::debug!("unknown word {:?} at {}", word, span);
            return Err(LonghandError::syntax(OP, word, *span));
        };
        tracing::trace!("fold {:?}", term);
        if acc.fold(term).is_none() {
            tracing::debug!("overflow at {:?} ({}) in {:?}", word, span, phrase);
            return Err(LonghandError::range(OP, phrase));
        }
    }

    match acc.finish() {
        Some(value) => {
            tracing::debug!("parsed {:?} as {}", phrase, value);
            Ok(value)
        }
        None => {
            tracing::debug!("{:?} is outside the i64 range", phrase);
            Err(LonghandError::range(OP, phrase))
        }
    }
}

/// Parse a longhand phrase into a 32-bit signed integer.
///
/// Same vocabulary and rules as [`parse_longhand64`], followed by a check
/// that the value lies in `i32::MIN..=i32::MAX`. Errors from the 64-bit
/// parse are re-tagged with this operation.
pub fn parse_longhand32(phrase: &str) -> Result<i32> {
    const OP: Operation = Operation::ParseLonghand32;

    let value = parse_longhand64(phrase).map_err(|e| e.with_operation(OP))?;
    i32::try_from(value).map_err(|_| {
        tracing::debug!("{} is outside the i32 range", value);
        LonghandError::range(OP, phrase)
    })
}

/// Parse with the entry point selected by `width`
pub fn parse_longhand(phrase: &str, width: Width) -> Result<i64> {
    match width {
        Width::I32 => parse_longhand32(phrase).map(i64::from),
        Width::I64 => parse_longhand64(phrase),
    }
}
