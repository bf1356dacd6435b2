//! Token definitions

use logos::Logos;

/// A single word of a longhand phrase, already lowercased.
///
/// Space, tab, CR, LF and `-` separate words, so "thirty-one" and
/// "thirty one" lex identically. Every other character belongs to a word.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\-]+")]
pub enum Token {
    #[regex(r"[^ \t\r\n\-]+", |lex| lex.slice().to_ascii_lowercase())]
    Word(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(w) => w,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
