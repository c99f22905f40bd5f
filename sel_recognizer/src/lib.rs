//! Scanner and LL(1) recognizer for a small arithmetic expression language
//!
//! ```text
//! Program -> Expr EndOfInput
//! Expr    -> Term (Plus Term)*
//! Term    -> Fact (Times Fact)*
//! Fact    -> Integer | OpenParen Expr CloseParen
//! ```

// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{scan, tokenize, Scanner};
pub use pipeline::{
    check, check_report, check_with_config, verdict, CheckReport, PipelineError, PipelineResult,
    Verdict,
};
pub use syntax::{recognize, SyntaxError, SyntaxResult};
pub use tokens::{Token, TokenCategory, TokenStream};
