//! Token vocabulary shared by the scanner and the recognizer
//!
//! The category set is closed: every lexical unit the scanner can produce is
//! one of these seven variants.
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenCategory {
    /// One or more digits
    Integer,
    /// `+`
    Plus,
    /// `*`
    Times,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// End marker appended after the last scanned unit
    EndOfInput,
    /// Any single character no other rule accepts
    Invalid,
}

impl TokenCategory {
    /// Every category, in declaration order
    pub const ALL: [TokenCategory; 7] = [
        Self::Integer,
        Self::Plus,
        Self::Times,
        Self::OpenParen,
        Self::CloseParen,
        Self::EndOfInput,
        Self::Invalid,
    ];

    /// Stable upper-case name, matching the category names used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "INT",
            Self::Plus => "PLUS",
            Self::Times => "TIMES",
            Self::OpenParen => "OPEN_PAR",
            Self::CloseParen => "CLOSE_PAR",
            Self::EndOfInput => "EOF",
            Self::Invalid => "BAD_TOKEN",
        }
    }

    /// Human-readable description for diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Times => "'*'",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::EndOfInput => "end of input",
            Self::Invalid => "invalid character",
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Times)
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Self::OpenParen | Self::CloseParen)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified lexical unit.
///
/// `lexeme` is the exact matched substring; it is `None` only for the
/// end-of-input marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(category: TokenCategory, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            lexeme: Some(lexeme.into()),
            span,
        }
    }

    /// The end-of-input marker, which carries no lexeme
    pub fn end_of_input(span: Span) -> Self {
        Self {
            category: TokenCategory::EndOfInput,
            lexeme: None,
            span,
        }
    }

    pub fn is(&self, category: TokenCategory) -> bool {
        self.category == category
    }

    pub fn is_end(&self) -> bool {
        self.category == TokenCategory::EndOfInput
    }

    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "[{}, \"{}\"]", self.category, lexeme),
            None => write!(f, "[{}]", self.category),
        }
    }
}
