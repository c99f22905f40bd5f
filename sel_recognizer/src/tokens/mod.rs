//! Token system for expression scanning
//!
//! Tokens pair a [`TokenCategory`] with the exact lexeme and a source
//! [`Span`](crate::utils::Span). The end-of-input marker is the only token
//! without a lexeme.
//!
//! ## Key Components
//!
//! - **[`TokenCategory`]** - Closed set of lexical classes
//! - **[`Token`]** - A classified lexical unit
//! - **[`TokenStream`]** - Eagerly collected token sequence

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenCategory};
pub use token_stream::TokenStream;
