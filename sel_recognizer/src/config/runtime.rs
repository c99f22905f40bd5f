// RUNTIME PREFERENCES (User Experience)

use super::compile_time;
use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-category token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to emit a debug event for every scanned token
    pub trace_tokens: bool,

    /// Maximum input length in bytes (clamped to the compile-time limit)
    pub max_input_length: usize,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            trace_tokens: env::var(env_vars::LEXICAL_TRACE_TOKENS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            max_input_length: env::var(env_vars::LEXICAL_MAX_INPUT_LENGTH)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(compile_time::lexical::MAX_INPUT_LENGTH),
        }
    }
}

impl LexicalPreferences {
    /// Input limit actually enforced
    pub fn effective_max_input_length(&self) -> usize {
        self.max_input_length
            .min(compile_time::lexical::MAX_INPUT_LENGTH)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxPreferences {
    /// Maximum parenthesis nesting depth (clamped to the compile-time limit)
    pub max_parse_depth: usize,

    /// Whether to emit a debug event on entry to each production
    pub trace_productions: bool,
}

impl Default for SyntaxPreferences {
    fn default() -> Self {
        Self {
            max_parse_depth: env::var(env_vars::SYNTAX_MAX_PARSE_DEPTH)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(compile_time::syntax::DEFAULT_PARSE_DEPTH),
            trace_productions: env::var(env_vars::SYNTAX_TRACE_PRODUCTIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl SyntaxPreferences {
    /// Compile-time defaults, ignoring the environment
    pub const fn builtin() -> Self {
        Self {
            max_parse_depth: compile_time::syntax::DEFAULT_PARSE_DEPTH,
            trace_productions: false,
        }
    }

    /// Nesting limit actually enforced, never zero
    pub fn effective_max_parse_depth(&self) -> usize {
        self.max_parse_depth
            .clamp(1, compile_time::syntax::MAX_PARSE_DEPTH)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to include timing metrics in logs
    pub log_performance_events: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            log_performance_events: env::var(env_vars::LOGGING_LOG_PERFORMANCE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }

    /// Raise the level by `steps` verbosity notches, saturating at Debug
    pub fn raised_by(self, steps: u8) -> Self {
        match (self as u8).saturating_add(steps) {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub syntax: SyntaxPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document. Missing tables and keys fall back to the
    /// environment-driven defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject explicit settings beyond the compile-time limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lexical.max_input_length > compile_time::lexical::MAX_INPUT_LENGTH {
            return Err(ConfigError::LimitExceeded {
                setting: "lexical.max_input_length",
                value: self.lexical.max_input_length,
                limit: compile_time::lexical::MAX_INPUT_LENGTH,
            });
        }

        if self.syntax.max_parse_depth > compile_time::syntax::MAX_PARSE_DEPTH {
            return Err(ConfigError::LimitExceeded {
                setting: "syntax.max_parse_depth",
                value: self.syntax.max_parse_depth,
                limit: compile_time::syntax::MAX_PARSE_DEPTH,
            });
        }

        if self.syntax.max_parse_depth == 0 {
            return Err(ConfigError::InvalidValue {
                setting: "syntax.max_parse_depth",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Render the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "SEL_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_TRACE_TOKENS: &str = "SEL_LEXICAL_TRACE_TOKENS";
    pub const LEXICAL_MAX_INPUT_LENGTH: &str = "SEL_LEXICAL_MAX_INPUT_LENGTH";

    // Syntax
    pub const SYNTAX_MAX_PARSE_DEPTH: &str = "SEL_SYNTAX_MAX_PARSE_DEPTH";
    pub const SYNTAX_TRACE_PRODUCTIONS: &str = "SEL_SYNTAX_TRACE_PRODUCTIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "SEL_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "SEL_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "SEL_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_PERFORMANCE: &str = "SEL_LOGGING_LOG_PERFORMANCE";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_log_level_raise_saturates() {
        assert_eq!(LogLevel::Warning.raised_by(0), LogLevel::Warning);
        assert_eq!(LogLevel::Warning.raised_by(1), LogLevel::Info);
        assert_eq!(LogLevel::Warning.raised_by(9), LogLevel::Debug);
    }

    #[test]
    fn test_toml_overrides_selected_keys() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [syntax]
            max_parse_depth = 16

            [logging]
            min_log_level = "debug"
            use_structured_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.syntax.max_parse_depth, 16);
        assert_eq!(config.syntax.effective_max_parse_depth(), 16);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.use_structured_logging);
    }

    #[test]
    fn test_toml_limit_violation() {
        let result = RuntimeConfig::from_toml_str("[syntax]\nmax_parse_depth = 100000\n");
        assert_matches!(
            result,
            Err(ConfigError::LimitExceeded {
                setting: "syntax.max_parse_depth",
                value: 100000,
                ..
            })
        );

        let result = RuntimeConfig::from_toml_str("[syntax]\nmax_parse_depth = 0\n");
        assert_matches!(result, Err(ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_toml_syntax_error() {
        let result = RuntimeConfig::from_toml_str("[syntax\nmax_parse_depth = ");
        assert_matches!(result, Err(ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[lexical]\nmax_input_length = 64").unwrap();

        let config = RuntimeConfig::load(file.path()).unwrap();
        assert_eq!(config.lexical.max_input_length, 64);
        assert_eq!(config.lexical.effective_max_input_length(), 64);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::load(dir.path().join("absent.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }

    #[test]
    fn test_builtin_syntax_preferences() {
        let builtin = SyntaxPreferences::builtin();
        assert_eq!(builtin.max_parse_depth, compile_time::syntax::DEFAULT_PARSE_DEPTH);
        assert!(!builtin.trace_productions);
        assert_eq!(
            builtin.effective_max_parse_depth(),
            compile_time::syntax::DEFAULT_PARSE_DEPTH
        );
    }

    #[test]
    fn test_effective_limits_clamp() {
        let syntax = SyntaxPreferences {
            max_parse_depth: 0,
            trace_productions: false,
        };
        assert_eq!(syntax.effective_max_parse_depth(), 1);

        let lexical = LexicalPreferences {
            max_input_length: usize::MAX,
            ..LexicalPreferences::default()
        };
        assert_eq!(
            lexical.effective_max_input_length(),
            compile_time::lexical::MAX_INPUT_LENGTH
        );
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let mut config = RuntimeConfig::default();
        config.syntax.max_parse_depth = 42;
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("max_parse_depth = 42"));
    }
}
