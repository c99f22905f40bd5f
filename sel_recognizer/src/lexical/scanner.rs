//! Lazy regex-driven scanner
//!
//! One compiled pattern with seven ordered alternatives classifies every
//! position of the input. The final alternative accepts any single
//! character, so every position matches and scanning cannot fail.

use crate::tokens::{Token, TokenCategory};
use crate::utils::{Position, Span};
use regex::{Captures, Regex};
use std::iter::FusedIterator;
use std::sync::OnceLock;

/// Alternatives are tried left to right; group index identifies the rule.
const TOKEN_PATTERN: &str = r"(?s)(\d+)|(\+)|(\*)|(\()|(\))|(\s)|(.)";

const GROUP_INTEGER: usize = 1;
const GROUP_PLUS: usize = 2;
const GROUP_TIMES: usize = 3;
const GROUP_OPEN: usize = 4;
const GROUP_CLOSE: usize = 5;
const GROUP_WHITESPACE: usize = 6;
const GROUP_INVALID: usize = 7;

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// Rule that fired for a match, `None` for whitespace
fn classify(captures: &Captures<'_>) -> Option<TokenCategory> {
    let group = (GROUP_INTEGER..=GROUP_INVALID).find(|&i| captures.get(i).is_some())?;
    match group {
        GROUP_INTEGER => Some(TokenCategory::Integer),
        GROUP_PLUS => Some(TokenCategory::Plus),
        GROUP_TIMES => Some(TokenCategory::Times),
        GROUP_OPEN => Some(TokenCategory::OpenParen),
        GROUP_CLOSE => Some(TokenCategory::CloseParen),
        GROUP_WHITESPACE => None,
        _ => Some(TokenCategory::Invalid),
    }
}

/// Iterator over the tokens of an input string.
///
/// Yields every significant token in order, then exactly one
/// [`TokenCategory::EndOfInput`] token, then `None` forever.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    position: Position,
    whitespace_skipped: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: Position::start(),
            whitespace_skipped: 0,
            finished: false,
        }
    }

    /// Position of the next unscanned character
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whitespace characters consumed so far
    pub fn whitespace_skipped(&self) -> usize {
        self.whitespace_skipped
    }

    /// The unscanned remainder of the input
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.position.offset..).unwrap_or("")
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        loop {
            let offset = self.position.offset;
            let captures = match token_regex().captures_at(self.input, offset) {
                Some(captures) if offset < self.input.len() => captures,
                _ => {
                    self.finished = true;
                    return Some(Token::end_of_input(Span::empty_at(self.position)));
                }
            };

            // Group 0 always participates when captures are returned
            let lexeme = captures.get(0).map_or("", |m| m.as_str());
            let start = self.position;
            self.position = start.advance_str(lexeme);

            match classify(&captures) {
                Some(category) => {
                    return Some(Token::new(
                        category,
                        lexeme,
                        Span::new(start, self.position),
                    ))
                }
                None => self.whitespace_skipped += 1,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            // At most one token per remaining char, plus the end marker
            (1, Some(self.remaining().chars().count() + 1))
        }
    }
}

impl FusedIterator for Scanner<'_> {}
