//! The read-eval-print loop.
//!
//! For every command line: record it in the transcript, echo
//! `running: <line>`, print the reply or error, then a blank line. Comments
//! are skipped entirely. Only I/O failures end the session early.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use stockroom_core::InventoryError;
use stockroom_inventory::InventoryDirectory;

use crate::command::{is_comment, parse_line};
use crate::dispatcher::{CommandDispatcher, DispatchError, Operation};
use crate::render::{OutputFormat, render_error, render_reply};
use crate::transcript::Transcript;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read command input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write command output: {0}")]
    Output(#[source] io::Error),

    #[error("failed to append to transcript: {0}")]
    Transcript(#[source] io::Error),
}

/// Counters for a finished session.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Command lines seen (comments excluded).
    pub commands: u64,
    /// Commands that ended in an error.
    pub failed: u64,
}

pub struct Session<T: Write> {
    dispatcher: CommandDispatcher,
    transcript: Transcript<T>,
    format: OutputFormat,
}

impl<T: Write> Session<T> {
    pub fn new(directory: InventoryDirectory, transcript: Transcript<T>, format: OutputFormat) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(directory),
            transcript,
            format,
        }
    }

    pub fn directory(&self) -> &InventoryDirectory {
        self.dispatcher.directory()
    }

    pub fn transcript(&self) -> &Transcript<T> {
        &self.transcript
    }

    /// Process `input` until end-of-input.
    ///
    /// A line that is not valid UTF-8 is rejected like any other malformed
    /// command; only failing reads end the session early.
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<SessionSummary, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw).map_err(SessionError::Input)? == 0 {
                break;
            }
            let bytes = strip_line_ending(&raw);
            let line = String::from_utf8_lossy(bytes);
            if is_comment(&line) {
                continue;
            }
            summary.commands += 1;

            self.transcript.record_bytes(bytes).map_err(SessionError::Transcript)?;

            let printed = if std::str::from_utf8(bytes).is_ok() {
                self.execute_line(&line)
            } else {
                Err(self.reject(&line, InventoryError::malformed("line is not valid UTF-8")))
            };
            if printed.is_err() {
                summary.failed += 1;
            }

            writeln!(output, "running: {line}").map_err(SessionError::Output)?;
            let lines = printed.unwrap_or_else(|message| vec![message]);
            for text in lines {
                writeln!(output, "{text}").map_err(SessionError::Output)?;
            }
            writeln!(output).map_err(SessionError::Output)?;
        }

        output.flush().map_err(SessionError::Output)?;
        Ok(summary)
    }

    /// Lines to print on success, or the error message on failure.
    fn execute_line(&mut self, line: &str) -> Result<Vec<String>, String> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Vec::new()),
            Err(source) => return Err(self.reject(line, source)),
        };

        match self.dispatcher.dispatch(command) {
            Ok(reply) => Ok(render_reply(&reply, self.format)),
            Err(err) => Err(render_error(&err, self.format)),
        }
    }

    fn reject(&self, line: &str, source: InventoryError) -> String {
        tracing::warn!(line, error = %source, "rejected command line");
        let err = DispatchError::new(Operation::Parsing, source);
        render_error(&err, self.format)
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}
