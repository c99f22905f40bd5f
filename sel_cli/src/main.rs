//! # sel
//!
//! Terminal driver for the expression recognizer. Prints `Syntax OK!` or
//! `Bad syntax!` and exits 0 when every input is accepted, 1 when any input
//! is rejected and 2 when the input or configuration cannot be read.

mod batch;
mod bridge;
mod cli;

use batch::BatchSummary;
use bridge::LogBridge;
use clap::Parser;
use cli::{Cli, InputSource};
use sel_recognizer::config::{LoggingPreferences, RuntimeConfig};
use sel_recognizer::logging::{self, codes, LoggingService, MultiLogger, StructuredLogger};
use sel_recognizer::pipeline::{check_report, CheckReport, Verdict};
use sel_recognizer::{log_info, log_success};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

const EXIT_ACCEPTED: u8 = 0;
const EXIT_REJECTED: u8 = 1;
const EXIT_FAILURE: u8 = 2;

const PROMPT: &str = "> ";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Verdict::Accepted) => ExitCode::from(EXIT_ACCEPTED),
        Ok(Verdict::Rejected) => ExitCode::from(EXIT_REJECTED),
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<Verdict, Box<dyn Error>> {
    let config = load_config(cli)?;
    init_logging(cli, &config.logging)?;

    log_info!("sel starting",
        "version" => env!("CARGO_PKG_VERSION"),
        "config" => logging::config::get_config_summary()
    );

    match cli.input_source() {
        InputSource::Argument(expr) => Ok(check_single(&expr, &config, cli)),
        InputSource::Stdin => {
            let line = prompt_line()?;
            Ok(check_single(&line, &config, cli))
        }
        InputSource::File(path) => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            let summary = batch::check_lines(&path, &contents, &config)?;
            print_batch(&summary, cli)?;
            Ok(if summary.all_accepted() {
                Verdict::Accepted
            } else {
                Verdict::Rejected
            })
        }
    }
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig, Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Install runtime preferences and the global logging service
fn init_logging(cli: &Cli, preferences: &LoggingPreferences) -> Result<(), Box<dyn Error>> {
    let mut preferences = preferences.clone();
    preferences.min_log_level = preferences.min_log_level.raised_by(cli.verbose);
    if cli.structured_logs {
        preferences.use_structured_logging = true;
    }

    let level = preferences.min_log_level;
    let console = preferences.enable_console_logging;
    let structured = preferences.use_structured_logging;
    logging::config::init_runtime_preferences(preferences)?;

    let min_level = level.to_events_log_level();
    let mut loggers = MultiLogger::new(min_level);
    if structured {
        loggers = loggers.with_logger(Arc::new(StructuredLogger::new(min_level)));
    } else if console {
        bridge::init_env_logger(bridge::to_level_filter(level));
        loggers = loggers.with_logger(Arc::new(LogBridge));
    }

    let service = LoggingService::new(Arc::new(loggers), min_level);
    logging::init_global_logging_with_service(Arc::new(service))?;
    log_success!(codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Logging initialized",
        "structured" => structured,
        "min_level" => level.as_str()
    );
    Ok(())
}

/// Print the prompt and read one line from stdin
fn prompt_line() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn check_single(input: &str, config: &RuntimeConfig, cli: &Cli) -> Verdict {
    let report = check_report(input, config);
    print_report(&report, input, cli);
    report.verdict
}

fn print_report(report: &CheckReport, input: &str, cli: &Cli) {
    if cli.json {
        match report.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(_) => println!("{}", report.message),
        }
        return;
    }

    println!("{}", report.message);
    if cli.verbose > 0 {
        if let Some(error) = &report.error {
            eprint!("{}", render_error(input, error));
        }
    }
}

fn render_error(input: &str, error: &sel_recognizer::pipeline::ReportedError) -> String {
    match &error.span {
        Some(span) => {
            let message = format!("[{}] {}", error.code, error.description);
            let mut rendered = sel_recognizer::utils::SourceMap::new(input).format_error(span, &message);
            rendered.push_str(&format!("  = {}\n", error.message));
            rendered
        }
        None => format!("[{}] {}\n", error.code, error.message),
    }
}

fn print_batch(summary: &BatchSummary, cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    for entry in &summary.reports {
        println!("{}: {}", entry.line, entry.report.message);
        if cli.verbose > 0 {
            if let Some(error) = &entry.report.error {
                eprint!("{}", render_error(&entry.report.input, error));
            }
        }
    }
    println!(
        "{} checked, {} accepted, {} rejected ({})",
        summary.total,
        summary.accepted,
        summary.rejected,
        display_source(Path::new(&summary.source))
    );
    Ok(())
}

fn display_source(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
