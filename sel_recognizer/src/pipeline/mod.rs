//! Scan-then-recognize facade
//!
//! [`check`] runs both stages over one input and returns either a
//! [`PipelineResult`] with metrics or the first [`PipelineError`].

pub mod error;
pub mod output;
pub mod result;

pub use error::PipelineError;
pub use output::{CheckReport, ReportedError, Verdict};
pub use result::PipelineResult;

use crate::config::RuntimeConfig;
use crate::lexical::LexicalAnalyzer;
use crate::logging::codes;
use crate::syntax::Recognizer;
use std::time::Instant;

/// Check `input` with configuration taken from the environment
pub fn check(input: &str) -> Result<PipelineResult, PipelineError> {
    check_with_config(input, &RuntimeConfig::default())
}

/// Check `input` with explicit configuration
pub fn check_with_config(
    input: &str,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    run(input, config).outcome
}

/// Two-valued outcome of [`check`]
pub fn verdict(input: &str) -> Verdict {
    Verdict::from(&check(input))
}

/// Check `input` and summarize the outcome as a [`CheckReport`]
pub fn check_report(input: &str, config: &RuntimeConfig) -> CheckReport {
    let pass = run(input, config);

    if let Err(error) = &pass.outcome {
        crate::log_debug!("Input rejected",
            "code" => error.error_code(),
            "category" => codes::get_category(error.error_code().as_str())
        );
    }

    CheckReport::from_outcome(input, &pass.outcome, pass.token_count)
}

/// One scan-then-recognize pass. `token_count` is zero when scanning never ran.
struct Pass {
    outcome: Result<PipelineResult, PipelineError>,
    token_count: usize,
}

fn run(input: &str, config: &RuntimeConfig) -> Pass {
    let start_time = Instant::now();

    let limit = config.lexical.effective_max_input_length();
    if input.len() > limit {
        let error = PipelineError::InputTooLarge {
            length: input.len(),
            limit,
        };
        crate::log_error!(error.error_code(), &error.to_string(),
            "input_bytes" => input.len(),
            "limit" => limit
        );
        return Pass {
            outcome: Err(error),
            token_count: 0,
        };
    }

    crate::log_debug!("Checking input", "input_bytes" => input.len());

    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let stream = analyzer.tokenize(input);
    let token_count = stream.len();

    let mut recognizer = Recognizer::with_preferences(stream.into_iter(), &config.syntax);
    let outcome = recognizer
        .recognize_program()
        .map_err(PipelineError::from)
        .map(|()| {
            let result = PipelineResult::new(
                input.len(),
                analyzer.metrics().clone(),
                token_count,
                recognizer.tokens_consumed(),
                recognizer.max_depth_seen(),
                start_time.elapsed(),
            );
            result.log_success();
            result
        });

    Pass {
        outcome,
        token_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxError;
    use crate::tokens::TokenCategory;
    use assert_matches::assert_matches;

    #[test]
    fn test_check_accepts_and_reports_metrics() {
        let result = check("(1 + 2) * 3").unwrap();
        assert_eq!(result.token_count, 8);
        assert_eq!(result.tokens_consumed, 8);
        assert_eq!(result.max_nesting_depth, 1);
        assert_eq!(result.input_length, 11);
        assert_eq!(result.lexical_metrics.total_tokens, 8);
    }

    #[test]
    fn test_check_wraps_syntax_error() {
        let error = check("1 +").unwrap_err();
        assert_matches!(
            error,
            PipelineError::SyntaxAnalysis(SyntaxError::UnexpectedToken {
                found: TokenCategory::EndOfInput,
                ..
            })
        );
        assert_eq!(error.error_code(), codes::syntax::UNEXPECTED_END_OF_INPUT);
    }

    #[test]
    fn test_input_limit_enforced() {
        let mut config = RuntimeConfig::default();
        config.lexical.max_input_length = 4;

        assert!(check_with_config("1+22", &config).is_ok());
        assert_matches!(
            check_with_config("1+222", &config),
            Err(PipelineError::InputTooLarge { length: 5, limit: 4 })
        );
    }

    #[test]
    fn test_syntax_preferences_flow_through() {
        let mut config = RuntimeConfig::default();
        config.syntax.max_parse_depth = 2;

        assert!(check_with_config("((1))", &config).is_ok());
        assert_matches!(
            check_with_config("(((1)))", &config),
            Err(PipelineError::SyntaxAnalysis(SyntaxError::NestingTooDeep { limit: 2, .. }))
        );
    }

    #[test]
    fn test_verdict() {
        assert_eq!(verdict("1+2*3"), Verdict::Accepted);
        assert_eq!(verdict("(1+2)*3"), Verdict::Accepted);
        assert_eq!(verdict(""), Verdict::Rejected);
        assert_eq!(verdict("1+2 3"), Verdict::Rejected);
    }

    #[test]
    fn test_check_report_counts_tokens_on_failure() {
        let report = check_report("1 + x", &RuntimeConfig::default());
        assert_eq!(report.verdict, Verdict::Rejected);
        assert_eq!(report.token_count, 4);
        assert_eq!(report.error.unwrap().found, Some(TokenCategory::Invalid));
    }

    #[test]
    fn test_rejected_pass_keeps_scanned_token_count() {
        let pass = run("(1 + 2", &RuntimeConfig::default());
        assert!(pass.outcome.is_err());
        assert_eq!(pass.token_count, 5);

        let mut config = RuntimeConfig::default();
        config.lexical.max_input_length = 2;
        let pass = run("(1 + 2", &config);
        assert_matches!(pass.outcome, Err(PipelineError::InputTooLarge { .. }));
        assert_eq!(pass.token_count, 0);
    }
}
