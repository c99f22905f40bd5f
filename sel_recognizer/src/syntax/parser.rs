//! Predictive recursive-descent recognizer
//!
//! One procedure per production, one token of lookahead, no backtracking:
//!
//! ```text
//! Program -> Expr EndOfInput
//! Expr    -> Term (Plus Term)*
//! Term    -> Fact (Times Fact)*
//! Fact    -> Integer | OpenParen Expr CloseParen
//! ```

use crate::config::runtime::SyntaxPreferences;
use crate::logging::codes;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenCategory};
use crate::utils::Span;
use crate::{log_debug, log_error, log_success, log_warning};
use std::iter::Fuse;

/// Lookahead categories that can start a factor
const FACT_FIRST: [TokenCategory; 2] = [TokenCategory::Integer, TokenCategory::OpenParen];

/// LL(1) recognizer over any token source
pub struct Recognizer<I: Iterator<Item = Token>> {
    tokens: Fuse<I>,
    lookahead: Token,
    consumed: usize,
    depth: usize,
    max_depth_seen: usize,
    max_depth: usize,
    trace: bool,
}

impl<I: Iterator<Item = Token>> Recognizer<I> {
    /// Create a recognizer with built-in preferences, pulling the first token.
    ///
    /// Environment overrides reach the recognizer only through
    /// [`with_preferences`](Self::with_preferences).
    pub fn new(tokens: I) -> Self {
        Self::with_preferences(tokens, &SyntaxPreferences::builtin())
    }

    pub fn with_preferences(tokens: I, preferences: &SyntaxPreferences) -> Self {
        let mut tokens = tokens.fuse();
        let lookahead = next_or_end(&mut tokens);

        Self {
            tokens,
            lookahead,
            consumed: 0,
            depth: 0,
            max_depth_seen: 0,
            max_depth: preferences.effective_max_parse_depth(),
            trace: preferences.trace_productions,
        }
    }

    /// Recognize `Program -> Expr EndOfInput`.
    ///
    /// Stops at the first mismatch. Tokens after the end marker are rejected.
    pub fn recognize_program(&mut self) -> SyntaxResult<()> {
        let result = self.program();

        match &result {
            Ok(()) => {
                log_success!(codes::success::RECOGNITION_COMPLETE,
                    "Input recognized",
                    "tokens_consumed" => self.consumed,
                    "max_depth" => self.max_depth_seen
                );
            }
            Err(error) => {
                log_error!(error.error_code(), &error.to_string(),
                    span = error.span(),
                    "tokens_consumed" => self.consumed
                );
            }
        }

        result
    }

    /// Tokens consumed so far, end marker included
    pub fn tokens_consumed(&self) -> usize {
        self.consumed
    }

    /// Deepest parenthesis nesting reached so far
    pub fn max_depth_seen(&self) -> usize {
        self.max_depth_seen
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The current lookahead token
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    // ========================================================================
    // Productions
    // ========================================================================

    fn program(&mut self) -> SyntaxResult<()> {
        self.trace_production("program");
        self.expr()?;
        self.expect(TokenCategory::EndOfInput)?;

        match self.tokens.next() {
            Some(extra) => Err(SyntaxError::unexpected_token(&[], &extra)),
            None => Ok(()),
        }
    }

    fn expr(&mut self) -> SyntaxResult<()> {
        self.trace_production("expr");
        self.term()?;
        while self.lookahead.is(TokenCategory::Plus) {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> SyntaxResult<()> {
        self.trace_production("term");
        self.fact()?;
        while self.lookahead.is(TokenCategory::Times) {
            self.advance();
            self.fact()?;
        }
        Ok(())
    }

    fn fact(&mut self) -> SyntaxResult<()> {
        self.trace_production("fact");
        match self.lookahead.category {
            TokenCategory::Integer => {
                self.advance();
                Ok(())
            }
            TokenCategory::OpenParen => {
                let open = self.advance();
                self.enter_group(open.span)?;
                self.expr()?;
                self.expect(TokenCategory::CloseParen)?;
                self.depth -= 1;
                Ok(())
            }
            _ => Err(SyntaxError::unexpected_token(&FACT_FIRST, &self.lookahead)),
        }
    }

    // ========================================================================
    // Token handling
    // ========================================================================

    /// Consume the lookahead if it has `category`, returning the consumed token
    pub fn expect(&mut self, category: TokenCategory) -> SyntaxResult<Token> {
        if self.lookahead.is(category) {
            Ok(self.advance())
        } else {
            Err(SyntaxError::unexpected_token(&[category], &self.lookahead))
        }
    }

    /// Replace the lookahead with the next token. The end marker is sticky.
    fn advance(&mut self) -> Token {
        let next = if self.lookahead.is_end() {
            self.lookahead.clone()
        } else {
            next_or_end(&mut self.tokens)
        };
        self.consumed += 1;
        std::mem::replace(&mut self.lookahead, next)
    }

    fn enter_group(&mut self, span: Span) -> SyntaxResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::nesting_too_deep(self.depth, self.max_depth, span));
        }
        self.max_depth_seen = self.max_depth_seen.max(self.depth);
        Ok(())
    }

    fn trace_production(&self, production: &str) {
        if self.trace {
            log_debug!("Entering production",
                "production" => production,
                "lookahead" => self.lookahead,
                "depth" => self.depth
            );
        }
    }
}

/// Next token, or a synthesized end marker if the source is exhausted
fn next_or_end<I: Iterator<Item = Token>>(tokens: &mut Fuse<I>) -> Token {
    tokens.next().unwrap_or_else(|| {
        log_warning!(code = codes::syntax::MISSING_EOF,
            "Token source ended without an end marker"
        );
        Token::end_of_input(Span::dummy())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::scan;
    use assert_matches::assert_matches;

    fn recognize_str(input: &str) -> SyntaxResult<()> {
        Recognizer::new(scan(input)).recognize_program()
    }

    fn token(category: TokenCategory, lexeme: &str) -> Token {
        Token::new(category, lexeme, Span::dummy())
    }

    #[test]
    fn test_accepts_basic_expressions() {
        for input in ["7", "1+2", "2*3", "(4)", "1+2*3", "(1+2)*3", "((((9))))", " 1 + ( 2 * 3 ) "] {
            assert!(recognize_str(input).is_ok(), "should accept {:?}", input);
        }
    }

    #[test]
    fn test_expect_returns_consumed_token() {
        let mut recognizer = Recognizer::new(scan("12+"));
        let consumed = recognizer.expect(TokenCategory::Integer).unwrap();
        assert_eq!(consumed.lexeme(), Some("12"));
        assert!(recognizer.lookahead().is(TokenCategory::Plus));

        let error = recognizer.expect(TokenCategory::Integer).unwrap_err();
        assert_eq!(error.found(), Some(TokenCategory::Plus));
        assert_eq!(error.expected(), &[TokenCategory::Integer]);
    }

    #[test]
    fn test_empty_input_reports_end_of_input() {
        let error = recognize_str("").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken {
                found: TokenCategory::EndOfInput,
                lexeme: None,
                ..
            }
        );
        assert_eq!(error.expected(), &FACT_FIRST);
    }

    #[test]
    fn test_trailing_operand_rejected() {
        let error = recognize_str("1+2 3").unwrap_err();
        assert_matches!(
            &error,
            SyntaxError::UnexpectedToken { found: TokenCategory::Integer, lexeme: Some(l), .. } if l == "3"
        );
        assert_eq!(error.expected(), &[TokenCategory::EndOfInput]);
        assert_eq!(error.span().start.offset, 4);
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(
            recognize_str("(1+2").unwrap_err().expected(),
            &[TokenCategory::CloseParen]
        );
        assert_eq!(
            recognize_str("1+2)").unwrap_err().found(),
            Some(TokenCategory::CloseParen)
        );
        assert!(recognize_str("()").is_err());
    }

    #[test]
    fn test_invalid_token_rejected_at_recognizer() {
        let error = recognize_str("1 + a").unwrap_err();
        assert_eq!(error.found(), Some(TokenCategory::Invalid));
        assert_eq!(error.error_code(), codes::syntax::INVALID_TOKEN);
    }

    #[test]
    fn test_missing_end_marker_treated_as_end() {
        let tokens = vec![
            token(TokenCategory::Integer, "1"),
            token(TokenCategory::Plus, "+"),
            token(TokenCategory::Integer, "2"),
        ];
        assert!(Recognizer::new(tokens.into_iter()).recognize_program().is_ok());

        let dangling = vec![token(TokenCategory::Integer, "1"), token(TokenCategory::Times, "*")];
        let error = Recognizer::new(dangling.into_iter())
            .recognize_program()
            .unwrap_err();
        assert_eq!(error.found(), Some(TokenCategory::EndOfInput));
        assert_eq!(error.span(), Span::dummy());
    }

    #[test]
    fn test_tokens_after_end_marker_rejected() {
        let tokens = vec![
            token(TokenCategory::Integer, "1"),
            Token::end_of_input(Span::dummy()),
            token(TokenCategory::Integer, "2"),
        ];
        let error = Recognizer::new(tokens.into_iter())
            .recognize_program()
            .unwrap_err();
        assert!(error.expected().is_empty());
        assert_eq!(error.error_code(), codes::syntax::TRAILING_INPUT);
    }

    #[test]
    fn test_nesting_limit() {
        let preferences = SyntaxPreferences {
            max_parse_depth: 3,
            trace_productions: false,
        };

        let within = Recognizer::with_preferences(scan("(((1)))"), &preferences).recognize_program();
        assert!(within.is_ok());

        let mut recognizer = Recognizer::with_preferences(scan("((((1))))"), &preferences);
        let error = recognizer.recognize_program().unwrap_err();
        assert_matches!(error, SyntaxError::NestingTooDeep { depth: 4, limit: 3, .. });
        assert_eq!(error.span().start.offset, 3);
        assert_eq!(recognizer.max_depth_seen(), 3);
    }

    #[test]
    fn test_tokens_consumed_counts_end_marker() {
        let mut recognizer = Recognizer::new(scan("(1+2)*3"));
        recognizer.recognize_program().unwrap();
        assert_eq!(recognizer.tokens_consumed(), 8);
        assert_eq!(recognizer.max_depth_seen(), 1);
    }
}
