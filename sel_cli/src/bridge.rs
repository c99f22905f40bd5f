//! Forwards library log events into the `log` facade

use sel_recognizer::config::LogLevel as ConfigLogLevel;
use sel_recognizer::logging::{LogEvent, LogLevel, Logger};

pub const LOG_TARGET: &str = "sel_recognizer";

/// `Logger` that re-emits every event as a `log` record
pub struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, event: &LogEvent) {
        let level = to_log_level(event.level);
        if !log::log_enabled!(target: LOG_TARGET, level) {
            return;
        }

        let mut line = format!("{} {}", event.code, event.message);
        if let Some(span) = &event.span {
            line.push_str(&format!(" at {}", span));
        }
        if !event.context.is_empty() {
            let mut pairs: Vec<_> = event.context.iter().collect();
            pairs.sort();
            for (key, value) in pairs {
                line.push_str(&format!(" {}={}", key, value));
            }
        }

        log::log!(target: LOG_TARGET, level, "{}", line);
    }
}

pub fn to_log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Error => log::Level::Error,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
    }
}

pub fn to_level_filter(level: ConfigLogLevel) -> log::LevelFilter {
    match level {
        ConfigLogLevel::Error => log::LevelFilter::Error,
        ConfigLogLevel::Warning => log::LevelFilter::Warn,
        ConfigLogLevel::Info => log::LevelFilter::Info,
        ConfigLogLevel::Debug => log::LevelFilter::Debug,
    }
}

/// Install `env_logger`. `RUST_LOG` overrides the configured level.
pub fn init_env_logger(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
