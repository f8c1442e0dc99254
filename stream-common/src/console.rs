//! Console effect used for debug printing of streams.
//!
//! Printing goes through the [`Console`] trait so tests can capture output
//! with a [`BufferConsole`] instead of writing to stdout.

use std::io::Write;

use crate::error::{Outcome, StreamError};

pub trait Console {
    fn print_line(&mut self, line: &str) -> Outcome<()>;
}

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&mut self, line: &str) -> Outcome<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}").map_err(|e| StreamError::Console(e.to_string()))
    }
}

/// Collects printed lines in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Console for BufferConsole {
    fn print_line(&mut self, line: &str) -> Outcome<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
