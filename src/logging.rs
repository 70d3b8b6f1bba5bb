//! Process-wide logging for binaries built on this crate.
//!
//! Library code only talks to the `log` facade. Binaries call
//! [`init_logging`] once to route records to stderr, keeping stdout free for
//! program output.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "GRIDFLEET_LOG";

/// Install the stderr logger at the level named by `GRIDFLEET_LOG`
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`), `info` if unset or
/// invalid. Calling it more than once is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
