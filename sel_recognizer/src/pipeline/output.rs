//! Serializable check reports

use super::error::PipelineError;
use super::result::PipelineResult;
use crate::lexical::LexicalMetrics;
use crate::tokens::TokenCategory;
use crate::utils::Span;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }

    /// Message printed by the terminal driver
    pub fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Syntax OK!",
            Self::Rejected => "Bad syntax!",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl<'a> From<&'a Result<PipelineResult, PipelineError>> for Verdict {
    fn from(outcome: &'a Result<PipelineResult, PipelineError>) -> Self {
        match outcome {
            Ok(_) => Self::Accepted,
            Err(_) => Self::Rejected,
        }
    }
}

/// Diagnostic part of a rejected report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedError {
    pub code: String,
    pub message: String,
    pub description: String,
    pub span: Option<Span>,
    pub expected: Vec<TokenCategory>,
    pub found: Option<TokenCategory>,
}

impl From<&PipelineError> for ReportedError {
    fn from(error: &PipelineError) -> Self {
        let syntax = error.syntax_error();
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            description: error.description().to_string(),
            span: error.span(),
            expected: syntax.map(|e| e.expected().to_vec()).unwrap_or_default(),
            found: syntax.and_then(|e| e.found()),
        }
    }
}

/// Summary of one check, suitable for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub input: String,
    pub verdict: Verdict,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ReportedError>,
    pub token_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lexical_metrics: Option<LexicalMetrics>,
    pub duration_ms: f64,
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    /// Build a report from a pipeline outcome.
    ///
    /// `token_count` is only known to the caller when the check failed.
    pub fn from_outcome(
        input: &str,
        outcome: &Result<PipelineResult, PipelineError>,
        token_count: usize,
    ) -> Self {
        let verdict = Verdict::from(outcome);
        let (error, lexical_metrics, token_count, duration_ms) = match outcome {
            Ok(result) => (
                None,
                Some(result.lexical_metrics.clone()),
                result.token_count,
                result.processing_duration.as_secs_f64() * 1000.0,
            ),
            Err(error) => (Some(ReportedError::from(error)), None, token_count, 0.0),
        };

        Self {
            input: input.to_string(),
            verdict,
            message: verdict.message().to_string(),
            error,
            token_count,
            lexical_metrics,
            duration_ms,
            checked_at: Utc::now(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxError;
    use crate::tokens::Token;
    use std::time::Duration;

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::Accepted.to_string(), "Syntax OK!");
        assert_eq!(Verdict::Rejected.to_string(), "Bad syntax!");
        assert_eq!(serde_json::to_string(&Verdict::Rejected).unwrap(), "\"rejected\"");
    }

    #[test]
    fn test_accepted_report() {
        let result = PipelineResult::new(1, LexicalMetrics::default(), 2, 2, 0, Duration::from_millis(2));
        let report = CheckReport::from_outcome("7", &Ok(result), 0);

        assert!(report.is_accepted());
        assert!(report.error.is_none());
        assert_eq!(report.token_count, 2);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["verdict"], "accepted");
        assert_eq!(json["message"], "Syntax OK!");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_rejected_report_carries_diagnostics() {
        let error = PipelineError::from(SyntaxError::unexpected_token(
            &[TokenCategory::CloseParen],
            &Token::end_of_input(Span::dummy()),
        ));
        let report = CheckReport::from_outcome("(1", &Err(error), 3);

        let reported = report.error.as_ref().unwrap();
        assert_eq!(report.verdict, Verdict::Rejected);
        assert_eq!(reported.code, "E042");
        assert_eq!(reported.expected, vec![TokenCategory::CloseParen]);
        assert_eq!(reported.found, Some(TokenCategory::EndOfInput));
        assert_eq!(report.token_count, 3);

        let parsed: CheckReport = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed.verdict, Verdict::Rejected);
        assert_eq!(parsed.error, report.error);
    }

    #[test]
    fn test_input_limit_report_has_no_span() {
        let error = PipelineError::InputTooLarge { length: 10, limit: 4 };
        let report = CheckReport::from_outcome("1+1+1+1+1", &Err(error), 0);
        let reported = report.error.unwrap();
        assert_eq!(reported.code, "E005");
        assert!(reported.span.is_none());
        assert!(reported.expected.is_empty());
    }
}
