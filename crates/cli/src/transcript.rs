//! Append-only transcript of raw command lines.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes each command line verbatim and flushes it before returning, so a
/// crash never loses an accepted line.
#[derive(Debug)]
pub struct Transcript<W: Write> {
    writer: W,
    lines: u64,
}

impl Transcript<File> {
    /// Create (or truncate) the transcript file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> Transcript<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    pub fn record(&mut self, line: &str) -> io::Result<()> {
        self.record_bytes(line.as_bytes())
    }

    /// Record a line as it was read, even if it is not valid UTF-8.
    pub fn record_bytes(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines recorded so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_verbatim() {
        let mut transcript = Transcript::new(Vec::new());
        transcript.record("ADD WAREHOUSE W1 10").unwrap();
        transcript.record("STOCK  W123 W1 7").unwrap();

        assert_eq!(transcript.lines(), 2);
        assert_eq!(
            String::from_utf8(transcript.into_inner()).unwrap(),
            "ADD WAREHOUSE W1 10\nSTOCK  W123 W1 7\n"
        );
    }

    #[test]
    fn raw_bytes_are_kept_as_read() {
        let mut transcript = Transcript::new(Vec::new());
        transcript.record_bytes(b"ADD PRODUCT \"Caf\xe9\" C1").unwrap();
        assert_eq!(transcript.into_inner(), b"ADD PRODUCT \"Caf\xe9\" C1\n".to_vec());
    }

    #[test]
    fn create_truncates_existing_file() {
        let path = std::env::temp_dir().join(format!("stockroom-transcript-{}.txt", std::process::id()));
        std::fs::write(&path, "stale\n").unwrap();

        let mut transcript = Transcript::create(&path).unwrap();
        transcript.record("LIST PRODUCTS").unwrap();
        drop(transcript);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "LIST PRODUCTS\n");
        std::fs::remove_file(&path).unwrap();
    }
}
