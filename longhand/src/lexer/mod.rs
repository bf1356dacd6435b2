//! Lexer implementation using logos

mod token;

pub use token::Token;

use crate::ast::Span;
use crate::error::{LonghandError, Operation, Result};
use logos::Logos;

/// Split a phrase into lowercased words with their byte spans
pub fn tokenize(phrase: &str) -> Result<Vec<(Token, Span)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(phrase);

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(_) => {
                return Err(LonghandError::syntax(
                    Operation::ParseLonghand64,
                    lexer.slice(),
                    span,
                ));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(phrase: &str) -> Vec<String> {
        tokenize(phrase)
            .unwrap()
            .into_iter()
            .map(|(t, _)| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_empty() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        let tokens = tokenize("   \t\t\n\n\r\n   ").unwrap();
        assert!(tokens.is_empty(), "whitespace-only phrase should produce no tokens");
    }

    #[test]
    fn test_tokenize_hyphens_only() {
        assert!(tokenize("- -- -").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_simple_phrase() {
        assert_eq!(words("seven thousand two"), vec!["seven", "thousand", "two"]);
    }

    #[test]
    fn test_tokenize_hyphen_is_separator() {
        assert_eq!(words("thirty-one"), words("thirty one"));
        assert_eq!(words("twenty--one"), vec!["twenty", "one"]);
    }

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(
            words("  one\thundred\r\nand-five  "),
            vec!["one", "hundred", "and", "five"]
        );
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(words("Seven THOUSAND tWo"), vec!["seven", "thousand", "two"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_punctuation() {
        assert_eq!(words("five 1000, one."), vec!["five", "1000,", "one."]);
    }

    #[test]
    fn test_tokenize_other_whitespace_is_part_of_word() {
        // Only ASCII space, tab, CR and LF separate words
        assert_eq!(words("seven\u{a0}thousand"), vec!["seven\u{a0}thousand"]);
        assert_eq!(words("seven\u{b}thousand"), vec!["seven\u{b}thousand"]);
    }

    #[test]
    fn test_tokenize_non_ascii_not_lowercased() {
        assert_eq!(words("ÉLAN"), vec!["Élan"]);
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("two hundred").unwrap();
        assert_eq!(tokens[0].1, Span::new(0, 3));
        assert_eq!(tokens[1].1, Span::new(4, 11));
    }

    #[test]
    fn test_tokenize_spans_after_hyphen() {
        let tokens = tokenize("forty-two").unwrap();
        assert_eq!(tokens[1].1, Span::new(6, 9));
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("Negative").unwrap();
        assert_eq!(tokens[0].0.to_string(), "negative");
    }
}
