#![cfg(feature = "std")]

use std::env;
use std::fmt;
use std::string::String;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use log::{self, Level, LevelFilter, Metadata, Record};

struct SessionLogger {
    started: OnceLock<Instant>,
}

impl SessionLogger {
    fn elapsed(&self) -> Duration {
        self.started.get_or_init(Instant::now).elapsed()
    }
}

/// One stderr line: seconds since logging started, level, module, message.
fn format_line(elapsed: Duration, level: Level, target: &str, args: fmt::Arguments<'_>) -> String {
    format!(
        "[{:>4}.{:03}s] {:<5} {}: {}",
        elapsed.as_secs(),
        elapsed.subsec_millis(),
        level,
        target,
        args
    )
}

impl log::Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(self.elapsed(), record.level(), record.target(), *record.args())
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: SessionLogger = SessionLogger {
    started: OnceLock::new(),
};

/// Initialize logging with a level taken from the `BINGO_LOG` environment variable.
/// Defaults to `warn` so log lines do not interleave with the card on stdout.
pub fn init_logging() {
    let level = env::var("BINGO_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    LOGGER.elapsed();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_time_level_and_module() {
        let line = format_line(
            Duration::from_millis(1_042),
            Level::Info,
            "bingo::session",
            format_args!("called {}", "B-12"),
        );
        assert_eq!(line, "[   1.042s] INFO  bingo::session: called B-12");
    }
}
