use crate::logging::{codes, Code};
use crate::syntax::SyntaxError;
use crate::utils::Span;

/// Pipeline processing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),

    #[error("Input too large: {length} bytes (max {limit})")]
    InputTooLarge { length: usize, limit: usize },
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::SyntaxAnalysis(error) => error.error_code(),
            Self::InputTooLarge { .. } => codes::input::INPUT_TOO_LARGE,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::SyntaxAnalysis(error) => Some(error.span()),
            Self::InputTooLarge { .. } => None,
        }
    }

    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Self::SyntaxAnalysis(error) => Some(error),
            Self::InputTooLarge { .. } => None,
        }
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }
}
