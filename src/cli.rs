use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use num_traits::ToPrimitive;

use crate::enumerate::validate_digit_string;
use crate::search::{SearchEvent, spawn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// annum - Find expressions over a digit string for every reachable integer
#[derive(Parser, Debug)]
#[command(name = "annum")]
#[command(
    about = "Find the fewest-operations arithmetic expression over a digit string for every reachable positive integer"
)]
#[command(version)]
pub struct CliArgs {
    /// String of digits (e.g. a year) to build expressions from
    pub digit_string: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digit_string: String,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_digit_string(&args.digit_string).context("Invalid digit string")?;

    Ok(CliConfig {
        digit_string: args.digit_string,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!(
        "Searching for expressions over digits '{}'",
        config.digit_string
    );

    let handle = spawn(&config.digit_string).context("Failed to start search worker")?;

    let mut reached = HashSet::new();
    let mut updates = 0usize;
    for event in handle.iter() {
        match event {
            SearchEvent::Solution(solution) => {
                println!("{} = {}", solution.value, solution.expression);
                if let Some(small) = solution.value.to_u64() {
                    reached.insert(small);
                }
                updates += 1;
            }
            SearchEvent::Done => break,
        }
    }

    // Longest run of consecutive integers reachable from 1.
    let mut streak = 0u64;
    while reached.contains(&(streak + 1)) {
        streak += 1;
    }

    if streak > 0 {
        println!(
            "Search complete: {updates} update(s); every integer from 1 to {streak} reached."
        );
    } else {
        println!("Search complete: {updates} update(s); no expression for 1 found.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_digit_string() {
        assert!(validate_digit_string("123").is_ok());
        assert!(validate_digit_string("12a3").is_err());
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs {
            digit_string: "2026".to_string(),
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.digit_string, "2026");
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
