//! Command-line arguments

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Check arithmetic expressions against the expression grammar
#[derive(Debug, Parser)]
#[command(name = "sel", version, about)]
pub struct Cli {
    /// Expression to check. Read from stdin when omitted.
    #[arg(value_name = "EXPR", conflicts_with = "file")]
    pub expr: Option<String>,

    /// Check every non-empty line of a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print JSON reports instead of verdict messages
    #[arg(long)]
    pub json: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Raise the log level (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit library log events as JSON lines on stderr
    #[arg(long)]
    pub structured_logs: bool,
}

/// Where the expressions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    File(PathBuf),
    Stdin,
}

impl Cli {
    pub fn input_source(&self) -> InputSource {
        match (&self.expr, &self.file) {
            (Some(expr), _) => InputSource::Argument(expr.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }
}
