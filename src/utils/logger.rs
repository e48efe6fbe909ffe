// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: TermLogger = TermLogger;

struct TermLogger;

/// Installs the terminal logger. Debug records only show up when
/// `verbose` is set; everything goes to stderr so it never mixes with
/// drawn UI.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

impl log::Log for TermLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let icon = match record.level() {
                Level::Error => "🔴",
                Level::Warn => "🟠",
                Level::Info => "🔵",
                Level::Debug => "⚪",
                Level::Trace => "▫️",
            };

            // Format: "🔴  File not found"
            eprintln!("{}  {}", icon, record.args());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_single_shot() {
        assert!(init(false).is_ok());
        assert!(init(true).is_err());
    }
}
