//! Syntax errors raised by the recognizer
//!
//! Every variant carries the span of the token that stopped recognition and
//! maps to a logging code.

use crate::logging::{codes, Code};
use crate::tokens::{Token, TokenCategory};
use crate::utils::{SourceMap, Span};

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error(
        "Unexpected {}: expected {} at {span}",
        describe_found(.found, .lexeme),
        describe_expected(.expected)
    )]
    UnexpectedToken {
        expected: Vec<TokenCategory>,
        found: TokenCategory,
        lexeme: Option<String>,
        span: Span,
    },

    #[error("Parenthesis nesting depth {depth} exceeds limit {limit} at {span}")]
    NestingTooDeep {
        depth: usize,
        limit: usize,
        span: Span,
    },
}

fn describe_found(found: &TokenCategory, lexeme: &Option<String>) -> String {
    match (found, lexeme) {
        (TokenCategory::Integer | TokenCategory::Invalid, Some(lexeme)) => {
            format!("{} '{}'", found.describe(), lexeme)
        }
        _ => found.describe().to_string(),
    }
}

fn describe_expected(expected: &[TokenCategory]) -> String {
    if expected.is_empty() {
        return "no further tokens".to_string();
    }
    expected
        .iter()
        .map(TokenCategory::describe)
        .collect::<Vec<_>>()
        .join(" or ")
}

impl SyntaxError {
    /// Create unexpected token error from the offending lookahead
    pub fn unexpected_token(expected: &[TokenCategory], found: &Token) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_vec(),
            found: found.category,
            lexeme: found.lexeme.clone(),
            span: found.span,
        }
    }

    pub fn nesting_too_deep(depth: usize, limit: usize, span: Span) -> Self {
        Self::NestingTooDeep { depth, limit, span }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::NestingTooDeep { .. } => codes::syntax::MAX_NESTING_DEPTH,
            Self::UnexpectedToken { found, .. } if *found == TokenCategory::Invalid => {
                codes::syntax::INVALID_TOKEN
            }
            Self::UnexpectedToken {
                expected, found, ..
            } if expected.contains(&TokenCategory::CloseParen)
                || (*found == TokenCategory::CloseParen
                    && expected.contains(&TokenCategory::EndOfInput)) =>
            {
                codes::syntax::UNMATCHED_PARENTHESIS
            }
            Self::UnexpectedToken { found, .. } if *found == TokenCategory::EndOfInput => {
                codes::syntax::UNEXPECTED_END_OF_INPUT
            }
            Self::UnexpectedToken { expected, .. }
                if expected.is_empty() || expected.as_slice() == [TokenCategory::EndOfInput] =>
            {
                codes::syntax::TRAILING_INPUT
            }
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } | Self::NestingTooDeep { span, .. } => *span,
        }
    }

    /// Category of the token that stopped recognition
    pub fn found(&self) -> Option<TokenCategory> {
        match self {
            Self::UnexpectedToken { found, .. } => Some(*found),
            Self::NestingTooDeep { .. } => Some(TokenCategory::OpenParen),
        }
    }

    /// Categories that would have allowed recognition to continue
    pub fn expected(&self) -> &[TokenCategory] {
        match self {
            Self::UnexpectedToken { expected, .. } => expected,
            Self::NestingTooDeep { .. } => &[],
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }

    /// Message with the recommended action appended
    pub fn enhanced_message(&self) -> String {
        format!("{}. {}", self, self.recommended_action())
    }

    /// Render with the offending source line and a caret underline
    pub fn render(&self, source: &str) -> String {
        let message = format!("[{}] {}", self.error_code(), self.description());
        let mut rendered = SourceMap::new(source).format_error(&self.span(), &message);
        rendered.push_str(&format!("  = {}\n", self));
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;
    use assert_matches::assert_matches;

    fn token_at(category: TokenCategory, lexeme: &str, offset: usize) -> Token {
        let start = Position::new(offset, 1, offset as u32 + 1);
        Token::new(category, lexeme, Span::new(start, start.advance_str(lexeme)))
    }

    #[test]
    fn test_unexpected_token_display() {
        let error = SyntaxError::unexpected_token(
            &[TokenCategory::Integer, TokenCategory::OpenParen],
            &token_at(TokenCategory::Plus, "+", 2),
        );
        assert_eq!(
            error.to_string(),
            "Unexpected '+': expected integer or '(' at 1:3-4"
        );
        assert_eq!(error.error_code(), codes::syntax::UNEXPECTED_TOKEN);
    }

    #[test]
    fn test_found_lexeme_in_message() {
        let error = SyntaxError::unexpected_token(
            &[TokenCategory::EndOfInput],
            &token_at(TokenCategory::Integer, "42", 2),
        );
        assert!(error.to_string().starts_with("Unexpected integer '42'"));
        assert_eq!(error.error_code(), codes::syntax::TRAILING_INPUT);
    }

    #[test]
    fn test_code_classification() {
        let invalid = SyntaxError::unexpected_token(
            &[TokenCategory::Integer, TokenCategory::OpenParen],
            &token_at(TokenCategory::Invalid, "#", 0),
        );
        assert_eq!(invalid.error_code(), codes::syntax::INVALID_TOKEN);

        let unclosed = SyntaxError::unexpected_token(
            &[TokenCategory::CloseParen],
            &Token::end_of_input(Span::dummy()),
        );
        assert_eq!(unclosed.error_code(), codes::syntax::UNMATCHED_PARENTHESIS);

        let stray_close = SyntaxError::unexpected_token(
            &[TokenCategory::EndOfInput],
            &token_at(TokenCategory::CloseParen, ")", 1),
        );
        assert_eq!(stray_close.error_code(), codes::syntax::UNMATCHED_PARENTHESIS);

        let premature_end = SyntaxError::unexpected_token(
            &[TokenCategory::Integer, TokenCategory::OpenParen],
            &Token::end_of_input(Span::dummy()),
        );
        assert_eq!(
            premature_end.error_code(),
            codes::syntax::UNEXPECTED_END_OF_INPUT
        );
        assert_eq!(premature_end.category(), "Syntax");
    }

    #[test]
    fn test_nesting_error() {
        let error = SyntaxError::nesting_too_deep(5, 4, Span::dummy());
        assert_matches!(error, SyntaxError::NestingTooDeep { depth: 5, limit: 4, .. });
        assert_eq!(error.error_code(), codes::syntax::MAX_NESTING_DEPTH);
        assert_eq!(error.severity(), "High");
        assert!(error.expected().is_empty());
    }

    #[test]
    fn test_render_points_at_token() {
        let error = SyntaxError::unexpected_token(
            &[TokenCategory::Integer, TokenCategory::OpenParen],
            &token_at(TokenCategory::Invalid, "#", 4),
        );
        let rendered = error.render("1 + # 2");
        assert!(rendered.contains("[E044]"));
        assert!(rendered.contains("1 | 1 + # 2"));
        assert!(rendered.contains("  |     ^\n"));
    }
}
