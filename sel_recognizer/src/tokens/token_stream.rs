//! Eagerly collected token sequences
//!
//! The recognizer consumes any `Iterator<Item = Token>`; a `TokenStream` is
//! the materialized form, used when a caller needs to inspect or replay the
//! tokens of a pass.

use crate::tokens::token::{Token, TokenCategory};
use std::slice;

/// Ordered, finite token sequence produced by a full scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        crate::log_debug!("Token stream created",
            "token_count" => tokens.len()
        );
        Self { tokens }
    }

    /// Number of tokens, end marker included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Categories in stream order
    pub fn categories(&self) -> Vec<TokenCategory> {
        self.tokens.iter().map(|t| t.category).collect()
    }

    /// True when the stream ends with exactly one end-of-input marker
    pub fn has_end_marker(&self) -> bool {
        let markers = self.tokens.iter().filter(|t| t.is_end()).count();
        markers == 1 && self.tokens.last().is_some_and(Token::is_end)
    }

    /// Tokens that no scanner rule accepted
    pub fn invalid_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|t| t.is(TokenCategory::Invalid))
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    fn token(category: TokenCategory, lexeme: &str) -> Token {
        Token::new(category, lexeme, Span::dummy())
    }

    #[test]
    fn test_end_marker_detection() {
        let stream: TokenStream = vec![
            token(TokenCategory::Integer, "1"),
            Token::end_of_input(Span::dummy()),
        ]
        .into();
        assert!(stream.has_end_marker());
        assert_eq!(
            stream.categories(),
            vec![TokenCategory::Integer, TokenCategory::EndOfInput]
        );
    }

    #[test]
    fn test_missing_or_misplaced_end_marker() {
        let missing = TokenStream::new(vec![token(TokenCategory::Integer, "1")]);
        assert!(!missing.has_end_marker());

        let misplaced = TokenStream::new(vec![
            Token::end_of_input(Span::dummy()),
            token(TokenCategory::Integer, "1"),
        ]);
        assert!(!misplaced.has_end_marker());
    }

    #[test]
    fn test_invalid_tokens_filter() {
        let stream: TokenStream = [
            token(TokenCategory::Invalid, "#"),
            token(TokenCategory::Plus, "+"),
            token(TokenCategory::Invalid, "x"),
        ]
        .into_iter()
        .collect();

        let lexemes: Vec<_> = stream.invalid_tokens().filter_map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["#", "x"]);
        assert_eq!(stream.len(), 3);
    }
}
