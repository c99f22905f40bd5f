//! Syntax recognition for arithmetic expressions
//!
//! The recognizer validates a token sequence against the expression grammar
//! and reports either success or the first [`SyntaxError`]. It builds no
//! tree and evaluates nothing.

pub mod error;
pub mod parser;

use crate::config::runtime::SyntaxPreferences;
use crate::tokens::Token;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::Recognizer;

/// Recognize a complete program from any token source
pub fn recognize<T>(tokens: T) -> SyntaxResult<()>
where
    T: IntoIterator<Item = Token>,
{
    Recognizer::new(tokens.into_iter()).recognize_program()
}

/// Recognize with explicit preferences
pub fn recognize_with_preferences<T>(tokens: T, preferences: &SyntaxPreferences) -> SyntaxResult<()>
where
    T: IntoIterator<Item = Token>,
{
    Recognizer::with_preferences(tokens.into_iter(), preferences).recognize_program()
}
