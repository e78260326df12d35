//! Logging infrastructure for the bundlecfg library.
//!
//! The library reports through the `log` facade. [`Logger`] is a small
//! stderr backend for that facade whose verbosity is driven by CLI flags and
//! the `BUNDLECFG_LOG_MODE` environment variable.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no CLI flag sets the level.
pub const LOG_MODE_ENV: &str = "BUNDLECFG_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Ordered from least verbose (`Quiet`) to most verbose (`Trace`).
///
/// # Examples
///
/// ```
/// use bundlecfg::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Verbose < LogLevel::Trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Adds info and debug messages, e.g. which bundle files were loaded.
    Verbose,
    /// Adds trace messages, including per-lookup decisions.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "trace" => Ok(Self::Trace),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the `log` filter corresponding to this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// A stderr backend for the `log` facade.
///
/// # Examples
///
/// ```
/// use bundlecfg::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Verbose);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the specified level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Installs this logger as the global `log` backend.
    ///
    /// Only the first installation in a process registers the backend; later
    /// calls only adjust the global maximum level.
    pub fn install(self) {
        if log::set_boxed_logger(Box::new(self)).is_err() {
            log::trace!("Logger already installed, updating level to {}", self.level);
        }
        log::set_max_level(self.level.filter());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Determines the log level from CLI flags and the environment.
///
/// Priority: `verbose` flag, then `quiet` flag, then `BUNDLECFG_LOG_MODE`,
/// then `Normal`. An unparseable environment value is ignored.
#[must_use]
pub fn resolve_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Resolves the log level and installs a [`Logger`] for it.
///
/// # Examples
///
/// ```
/// use bundlecfg::{init_logger, LogLevel};
///
/// let logger = init_logger(false, true);
/// assert_eq!(logger.level(), LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let logger = Logger::new(resolve_log_level(verbose, quiet));
    logger.install();
    logger
}
