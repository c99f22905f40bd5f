//! Line-per-expression batch checking

use sel_recognizer::config::compile_time::batch::MAX_BATCH_LINES;
use sel_recognizer::config::RuntimeConfig;
use sel_recognizer::logging::codes;
use sel_recognizer::pipeline::{check_report, CheckReport};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Errors that stop a batch before any verdict is produced
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("no expressions found")]
    Empty,

    #[error("{lines} expressions exceed the batch limit of {limit}")]
    TooManyLines { lines: usize, limit: usize },
}

/// One checked line
#[derive(Debug, Serialize)]
pub struct LineReport {
    pub line: usize,
    #[serde(flatten)]
    pub report: CheckReport,
}

/// Outcome of checking every non-empty line of a source
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub source: String,
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub duration_ms: f64,
    pub reports: Vec<LineReport>,
}

impl BatchSummary {
    pub fn all_accepted(&self) -> bool {
        self.rejected == 0
    }
}

/// Check each non-empty line of `contents`
pub fn check_lines(
    source: &Path,
    contents: &str,
    config: &RuntimeConfig,
) -> Result<BatchSummary, BatchError> {
    let start_time = Instant::now();

    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    if lines.is_empty() {
        sel_recognizer::log_error!(codes::input::EMPTY_BATCH, "Batch contains no expressions",
            "source" => source.display()
        );
        return Err(BatchError::Empty);
    }
    if lines.len() > MAX_BATCH_LINES {
        return Err(BatchError::TooManyLines {
            lines: lines.len(),
            limit: MAX_BATCH_LINES,
        });
    }

    let reports: Vec<LineReport> = lines
        .into_iter()
        .map(|(line, text)| LineReport {
            line,
            report: check_report(text, config),
        })
        .collect();

    let accepted = reports.iter().filter(|r| r.report.is_accepted()).count();
    let summary = BatchSummary {
        source: source.display().to_string(),
        total: reports.len(),
        accepted,
        rejected: reports.len() - accepted,
        duration_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        reports,
    };

    sel_recognizer::log_success!(codes::success::BATCH_COMPLETE, "Batch check completed",
        "total" => summary.total,
        "accepted" => summary.accepted,
        "rejected" => summary.rejected
    );

    Ok(summary)
}
