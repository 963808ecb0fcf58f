//! Stderr logger for the binaries.
//!
//! The level comes from `BATTLESHIPS_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace` or `off`). Output goes to stderr so it never mixes with the prompts
//! and results the console game writes to stdout.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BATTLESHIPS_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, or `warn` when it is missing or unrecognised.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger at the level set by [`LOG_ENV`]. Later calls are no-ops.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("chatty")), LevelFilter::Warn);
    }

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(level_from(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" off ")), LevelFilter::Off);
    }
}
