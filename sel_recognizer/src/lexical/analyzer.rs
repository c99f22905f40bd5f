//! Metrics-collecting lexical analyzer
//!
//! Wraps the lazy [`Scanner`] with runtime preferences, per-pass metrics and
//! logging. Token output is identical to a plain scan.

use super::scanner::Scanner;
use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenCategory, TokenStream};
use crate::{log_debug, log_success, log_warning};
use serde::{Deserialize, Serialize};

/// Per-pass lexical metrics
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalMetrics {
    /// All emitted tokens, end marker included
    pub total_tokens: usize,
    pub integer_tokens: usize,
    pub operator_tokens: usize,
    pub paren_tokens: usize,
    pub invalid_tokens: usize,
    pub whitespace_skipped: usize,
    pub longest_integer: usize,
    pub oversized_integers: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.category {
            TokenCategory::Integer => {
                self.integer_tokens += 1;
                let length = token.lexeme().map_or(0, str::len);
                self.longest_integer = self.longest_integer.max(length);
                if length > LONG_INTEGER_THRESHOLD {
                    self.oversized_integers += 1;
                }
            }
            TokenCategory::Invalid => self.invalid_tokens += 1,
            category if category.is_operator() => self.operator_tokens += 1,
            category if category.is_paren() => self.paren_tokens += 1,
            _ => {}
        }
    }

    /// Tokens other than the end marker
    pub fn significant_tokens(&self) -> usize {
        self.total_tokens.saturating_sub(1)
    }

    pub fn has_invalid_tokens(&self) -> bool {
        self.invalid_tokens > 0
    }
}

/// Lexical analyzer with runtime preferences and metrics
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Scan `input` completely, recording metrics for this pass
    pub fn tokenize(&mut self, input: &str) -> TokenStream {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis",
            "input_bytes" => input.len(),
            "detailed_metrics" => self.preferences.collect_detailed_metrics
        );

        let mut scanner = Scanner::new(input);
        let mut tokens = Vec::with_capacity(scanner.size_hint().0);

        for token in scanner.by_ref() {
            self.metrics.record_token(&token, &self.preferences);
            self.report_token(&token);
            tokens.push(token);
        }
        self.metrics.whitespace_skipped = scanner.whitespace_skipped();

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "token_count" => self.metrics.total_tokens,
            "integers" => self.metrics.integer_tokens,
            "operators" => self.metrics.operator_tokens,
            "parentheses" => self.metrics.paren_tokens,
            "invalid" => self.metrics.invalid_tokens,
            "whitespace_skipped" => self.metrics.whitespace_skipped
        );

        TokenStream::new(tokens)
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    fn report_token(&self, token: &Token) {
        if self.preferences.trace_tokens {
            log_debug!("Scanned token",
                "category" => token.category,
                "lexeme" => token.lexeme().unwrap_or(""),
                "span" => token.span
            );
        }

        match token.category {
            TokenCategory::Invalid => {
                log_warning!(code = codes::lexical::INVALID_CHARACTER,
                    "Character outside the expression alphabet",
                    span = token.span,
                    "lexeme" => token.lexeme().unwrap_or("")
                );
            }
            TokenCategory::Integer
                if token.lexeme().map_or(0, str::len) > LONG_INTEGER_THRESHOLD =>
            {
                log_warning!(code = codes::lexical::OVERSIZED_INTEGER,
                    "Integer literal is unusually long",
                    span = token.span,
                    "digits" => token.lexeme().map_or(0, str::len)
                );
            }
            _ => {}
        }
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
