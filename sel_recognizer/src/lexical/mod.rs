//! Lexical analysis for arithmetic expressions
//!
//! [`scan`] produces tokens lazily; [`tokenize`] collects them into a
//! [`TokenStream`]. Scanning never fails: characters outside the alphabet
//! become [`TokenCategory::Invalid`](crate::tokens::TokenCategory::Invalid)
//! tokens and are rejected later by the recognizer.

pub mod analyzer;
pub mod scanner;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::TokenStream;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics};
pub use scanner::Scanner;

/// Lazily scan `input`
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Scan `input` completely
pub fn tokenize(input: &str) -> TokenStream {
    scan(input).collect()
}

/// Scan `input` completely with explicit preferences, returning metrics
pub fn tokenize_with_preferences(
    input: &str,
    preferences: LexicalPreferences,
) -> (TokenStream, LexicalMetrics) {
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    let stream = analyzer.tokenize(input);
    (stream, analyzer.metrics().clone())
}
