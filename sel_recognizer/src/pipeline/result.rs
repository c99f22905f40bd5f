use crate::lexical::LexicalMetrics;
use std::time::Duration;

/// Result of a successful recognition pass
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub input_length: usize,
    pub lexical_metrics: LexicalMetrics,
    pub token_count: usize,
    pub tokens_consumed: usize,
    pub max_nesting_depth: usize,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        input_length: usize,
        lexical_metrics: LexicalMetrics,
        token_count: usize,
        tokens_consumed: usize,
        max_nesting_depth: usize,
        processing_duration: Duration,
    ) -> Self {
        Self {
            input_length,
            lexical_metrics,
            token_count,
            tokens_consumed,
            max_nesting_depth,
            processing_duration,
        }
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::INPUT_ACCEPTED,
            "Input accepted",
            "input_bytes" => self.input_length,
            "token_count" => self.token_count,
            "max_nesting_depth" => self.max_nesting_depth
        );
        crate::log_performance!(
            crate::logging::codes::success::RECOGNITION_COMPLETE,
            "Recognition timing",
            duration = self.processing_duration,
            "tokens_per_sec" => format!("{:.0}",
                self.token_count as f64 / self.processing_duration.as_secs_f64().max(f64::EPSILON))
        );
    }
}
