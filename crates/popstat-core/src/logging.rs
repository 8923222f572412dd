//! Logging setup: env_logger behind the `log` facade, routed through
//! indicatif when a spinner is on screen.

use indicatif::MultiProgress;

/// Modules whose debug output drowns out ours.
const NOISY_MODULES: &[&str] = &["html5ever", "selectors", "hyper", "reqwest", "duckdb"];

/// Padded label and ANSI color for a log level.
fn level_label(level: log::Level) -> (&'static str, &'static str) {
    match level {
        log::Level::Error => ("ERROR", "\x1b[31m"),
        log::Level::Warn => ("WARN ", "\x1b[33m"),
        log::Level::Info => ("INFO ", "\x1b[32m"),
        log::Level::Debug => ("DEBUG", "\x1b[36m"),
        log::Level::Trace => ("TRACE", "\x1b[35m"),
    }
}

/// Default filter for the given verbosity flags. `RUST_LOG` still wins.
pub fn default_filter(quiet: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// Logger that suspends the spinner while printing a line.
pub struct SpinnerAwareLogger {
    inner: env_logger::Logger,
    multi: MultiProgress,
}

impl SpinnerAwareLogger {
    pub fn new(inner: env_logger::Logger, multi: MultiProgress) -> Self {
        Self { inner, multi }
    }
}

impl log::Log for SpinnerAwareLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.inner.matches(record) {
            let (label, ansi) = level_label(record.level());
            let line = format!("[{ansi}{label}\x1b[0m] {}", record.args());
            self.multi.suspend(|| eprintln!("{line}"));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

fn builder(quiet: bool, debug: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    for module in NOISY_MODULES {
        builder.filter_module(module, log::LevelFilter::Warn);
    }
    builder.parse_filters(default_filter(quiet, debug));
    // RUST_LOG goes last so it overrides both the default and the module caps
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
}

/// Initialize logging once per process.
///
/// With `multi`, lines are printed through the progress display (TTY);
/// without it, plain `[LEVEL] message` lines go to stderr.
pub fn init_logging(quiet: bool, debug: bool, multi: Option<&MultiProgress>) {
    use std::io::Write;

    let mut builder = builder(quiet, debug);

    if let Some(multi) = multi {
        let logger = builder.build();
        let max_level = logger.filter();
        if log::set_boxed_logger(Box::new(SpinnerAwareLogger::new(logger, multi.clone()))).is_ok() {
            log::set_max_level(max_level);
        }
    } else {
        let _ = builder
            .format(|buf, record| {
                let (label, _) = level_label(record.level());
                writeln!(buf, "[{label}] {}", record.args())
            })
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn filter_levels() {
        assert_eq!(default_filter(false, false), "info");
        assert_eq!(default_filter(true, false), "warn");
        assert_eq!(default_filter(true, true), "debug");
    }

    #[test]
    fn labels_are_padded() {
        for level in [
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ] {
            assert_eq!(level_label(level).0.len(), 5);
        }
    }

    #[test]
    fn noisy_modules_capped() {
        let logger = builder(false, true).build();
        let md = log::Metadata::builder()
            .level(log::Level::Debug)
            .target("html5ever::tree_builder")
            .build();
        assert!(!logger.enabled(&md));

        let ours = log::Metadata::builder()
            .level(log::Level::Debug)
            .target("popstat_extract")
            .build();
        assert!(logger.enabled(&ours));
    }
}
