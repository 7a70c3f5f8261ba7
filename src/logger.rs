//! Timestamped console output.
//!
//! Every line is written as `[HH:MM:SS] <message>` using local wall-clock
//! time.

use std::io::{self, Write};

use chrono::Local;

/// Prefix for recoverable failures.
pub const WARNING_MARKER: &str = "⚠";

/// Prefix for fatal failures.
pub const FATAL_MARKER: &str = "💀";

#[derive(Debug)]
enum Sink {
    Stdout,
    Memory(Vec<String>),
}

/// Write-only log handle owned by the environment.
#[derive(Debug)]
pub struct Logger {
    sink: Sink,
}

impl Logger {
    /// Logger that writes to the process console.
    #[must_use]
    pub const fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Logger that keeps lines in memory instead of printing them.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            sink: Sink::Memory(Vec::new()),
        }
    }

    /// Writes one timestamped line.
    pub fn write(&mut self, message: impl AsRef<str>) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), message.as_ref());
        match &mut self.sink {
            // Console write failures are ignored.
            Sink::Stdout => {
                let _ = writeln!(io::stdout().lock(), "{line}");
            }
            Sink::Memory(lines) => lines.push(line),
        }
    }

    /// Writes a line prefixed with the warning marker.
    pub fn warn(&mut self, message: impl AsRef<str>) {
        self.write(format!("{WARNING_MARKER} {}", message.as_ref()));
    }

    /// Writes a line prefixed with the fatal marker.
    pub fn fatal(&mut self, message: impl AsRef<str>) {
        self.write(format!("{FATAL_MARKER} {}", message.as_ref()));
    }

    /// Lines recorded by an in-memory logger. Empty for the console sink.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match &self.sink {
            Sink::Stdout => &[],
            Sink::Memory(lines) => lines.as_slice(),
        }
    }
}
