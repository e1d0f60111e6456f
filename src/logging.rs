// Custom logger: colored level output with timestamps, plus per-topic
// debug filters so noisy per-frame topics can be enabled selectively.

use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

#[derive(Debug)]
struct WalkerLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl log::Log for WalkerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() <= self.level {
            // Debug and trace records are additionally gated by topic when
            // a filter list was supplied.
            if let Some(filters) = &self.debug_filters {
                if metadata.level() == log::Level::Debug || metadata.level() == log::Level::Trace {
                    return filters.contains(metadata.target())
                        || filters.iter().any(|f| metadata.target().starts_with(f));
                }
            }
            return true;
        }
        false
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level_color = match record.level() {
                log::Level::Error => "\x1B[31m", // Red
                log::Level::Warn => "\x1B[33m",  // Yellow
                log::Level::Info => "\x1B[32m",  // Green
                log::Level::Debug => "\x1B[36m", // Cyan
                log::Level::Trace => "\x1B[35m", // Magenta
            };
            let reset = "\x1B[0m";
            let timestamp = Local::now().format("%H:%M:%S%.3f");

            let mut output = format!(
                "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
                timestamp = timestamp,
                level_color = level_color,
                level = record.level(),
                reset = reset,
                target = record.target(),
                message = record.args()
            );

            if let Some(module_path) = record.module_path() {
                if module_path != record.target() {
                    output.push_str(&format!(" [{}]", module_path));
                }
            }

            let mut stdout = io::stdout();
            writeln!(stdout, "{}", output).expect("Failed to write to stdout");
            stdout.flush().expect("Failed to flush stdout");
        }
    }

    fn flush(&self) {
        io::stdout().flush().expect("Failed to flush stdout");
    }
}

static LOGGER: OnceLock<WalkerLogger> = OnceLock::new();

/// Initialize the logger. `debug_filter` is a comma-separated list of
/// topics ("caster", "motion", "rotation", "controller") to let through at
/// debug level.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect::<HashSet<String>>()
    });

    if LOGGER.get().is_none() {
        let logger = WalkerLogger {
            level,
            debug_filters,
        };
        LOGGER.set(logger).expect("Failed to set logger");
    }

    log::set_logger(LOGGER.get().unwrap()).map(|()| log::set_max_level(level))
}

// Topic-specific debug macros

#[macro_export]
macro_rules! debug_caster {
    ($($arg:tt)*) => {
        log::debug!(target: "caster", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_motion {
    ($($arg:tt)*) => {
        log::debug!(target: "motion", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_rotation {
    ($($arg:tt)*) => {
        log::debug!(target: "rotation", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_controller {
    ($($arg:tt)*) => {
        log::debug!(target: "controller", "{}", format_args!($($arg)*))
    }
}
