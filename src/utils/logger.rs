//! Logger utility for application-wide logging
//!
//! This module provides a logger for the `log` crate that prints records to
//! the console in verbose mode and can also copy every record to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Console and file logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level printed to the console
    console_level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `console_level` - Most verbose level echoed to the console
    /// * `log_file` - Optional path of a file receiving every record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(console_level: LevelFilter, log_file: Option<&Path>) -> io::Result<Self> {
        let file = match log_file {
            Some(path) => Some(File::create(path)?),
            None => None,
        };
        Ok(Logger {
            file: Mutex::new(file),
            console_level,
        })
    }

    /// Appends a line to the log file, if there is one
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
        }
        Ok(())
    }

    fn has_file(&self) -> bool {
        self.file.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Most verbose level any output wants
    pub fn max_level(&self) -> LevelFilter {
        if self.has_file() {
            LevelFilter::Debug
        } else {
            self.console_level
        }
    }

    /// Static method to initialize the global logger
    ///
    /// Verbose runs print debug records to the console; quiet runs only print
    /// warnings. Errors are left to the caller to report.
    pub fn init_global_logger(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
        let console_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
        let global_logger = Logger::new(console_level, log_file)?;
        let max_level = global_logger.max_level();

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(max_level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.level(), record.args());
        let _ = self.write_line(&message);

        if record.level() <= self.console_level && record.level() != Level::Error {
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
