//! Shared source-location primitives used by the scanner, the recognizer and
//! the diagnostics they emit.

pub mod span;

pub use span::{Position, SourceMap, Span};
