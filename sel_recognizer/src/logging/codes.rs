//! Consolidated error codes and classification system
//!
//! Single source of truth for all codes emitted by the recognizer, together
//! with their behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
    pub const CONFIGURATION_LIMIT: Code = Code::new("ERR004");
}

/// Input acquisition error codes
pub mod input {
    use super::Code;

    pub const INPUT_TOO_LARGE: Code = Code::new("E005");
    pub const IO_ERROR: Code = Code::new("E006");
    pub const EMPTY_BATCH: Code = Code::new("E007");
}

/// Lexical analysis codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const OVERSIZED_INTEGER: Code = Code::new("E021");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const MISSING_EOF: Code = Code::new("E040");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E041");
    pub const UNMATCHED_PARENTHESIS: Code = Code::new("E042");
    pub const TRAILING_INPUT: Code = Code::new("E043");
    pub const INVALID_TOKEN: Code = Code::new("E044");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const MAX_NESTING_DEPTH: Code = Code::new("E051");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const CONFIGURATION_LOADED: Code = Code::new("I002");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I010");
    pub const RECOGNITION_COMPLETE: Code = Code::new("I020");
    pub const INPUT_ACCEPTED: Code = Code::new("I030");
    pub const BATCH_COMPLETE: Code = Code::new("I031");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

const REGISTRY_ENTRIES: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        "Internal recognizer error",
        "Report the input that triggered the failure",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        "Logging or runtime initialization failed",
        "Check that initialization runs once per process",
    ),
    ErrorMetadata::new(
        "ERR003",
        "System",
        Severity::High,
        false,
        "Configuration could not be parsed",
        "Fix the TOML syntax or the offending value",
    ),
    ErrorMetadata::new(
        "ERR004",
        "System",
        Severity::High,
        false,
        "Configuration exceeds a compile-time limit",
        "Lower the setting to the documented maximum",
    ),
    // Input
    ErrorMetadata::new(
        "E005",
        "Input",
        Severity::High,
        false,
        "Input exceeds the maximum accepted length",
        "Split the input or raise lexical.max_input_length within limits",
    ),
    ErrorMetadata::new(
        "E006",
        "Input",
        Severity::High,
        false,
        "Input could not be read",
        "Check the path and file permissions",
    ),
    ErrorMetadata::new(
        "E007",
        "Input",
        Severity::Low,
        true,
        "Batch input contains no expressions",
        "Provide at least one non-empty line",
    ),
    // Lexical
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::Medium,
        true,
        "Character outside the expression alphabet",
        "Use only digits, '+', '*', parentheses and whitespace",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::Low,
        true,
        "Integer literal is unusually long",
        "No action needed; the literal is still recognized",
    ),
    // Syntax
    ErrorMetadata::new(
        "E040",
        "Syntax",
        Severity::Medium,
        true,
        "Token source ended without an end-of-input marker",
        "Terminate token sequences with an end-of-input token",
    ),
    ErrorMetadata::new(
        "E041",
        "Syntax",
        Severity::Medium,
        true,
        "Input ended before the expression was complete",
        "Complete the expression with an operand",
    ),
    ErrorMetadata::new(
        "E042",
        "Syntax",
        Severity::Medium,
        true,
        "Parentheses are not balanced",
        "Match every '(' with a ')'",
    ),
    ErrorMetadata::new(
        "E043",
        "Syntax",
        Severity::Medium,
        true,
        "Tokens remain after a complete expression",
        "Join operands with '+' or '*' or remove the trailing tokens",
    ),
    ErrorMetadata::new(
        "E044",
        "Syntax",
        Severity::Medium,
        true,
        "Invalid character where an expression token was required",
        "Remove characters outside the expression alphabet",
    ),
    ErrorMetadata::new(
        "E050",
        "Syntax",
        Severity::Medium,
        true,
        "Unexpected token",
        "Check operator and operand placement",
    ),
    ErrorMetadata::new(
        "E051",
        "Syntax",
        Severity::High,
        true,
        "Parenthesis nesting exceeds the configured depth",
        "Reduce nesting or raise syntax.max_parse_depth within limits",
    ),
    // Success
    ErrorMetadata::new(
        "I001",
        "System",
        Severity::Low,
        true,
        "Logging system initialized",
        "Continue",
    ),
    ErrorMetadata::new(
        "I002",
        "System",
        Severity::Low,
        true,
        "Configuration loaded",
        "Continue",
    ),
    ErrorMetadata::new(
        "I010",
        "Lexical",
        Severity::Low,
        true,
        "Tokenization completed",
        "Proceed to recognition",
    ),
    ErrorMetadata::new(
        "I020",
        "Syntax",
        Severity::Low,
        true,
        "Recognition completed",
        "Report the verdict",
    ),
    ErrorMetadata::new(
        "I030",
        "Pipeline",
        Severity::Low,
        true,
        "Input accepted",
        "Continue",
    ),
    ErrorMetadata::new(
        "I031",
        "Pipeline",
        Severity::Low,
        true,
        "Batch check completed",
        "Review the batch summary",
    ),
];

/// Metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTRY_ENTRIES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
