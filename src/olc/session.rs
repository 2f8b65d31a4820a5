//! Text session abstraction used by the menu engine.

use std::io::Write;

use log::warn;

/// Write-only text channel to the operator.
pub trait OlcSession {
    /// Fire-and-forget output.
    fn send(&mut self, text: &str);

    /// Called by the engine when it starts waiting for a free-text line.
    /// The default just shows the prompt.
    fn request_line(&mut self, prompt: &str) {
        self.send(prompt);
    }
}

/// Captures everything sent, for tests and for replaying into other sinks.
#[derive(Debug, Default, Clone)]
pub struct TranscriptSession {
    buf: String,
    prompts: usize,
}

impl TranscriptSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Drain the captured output.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.buf.contains(needle)
    }

    /// Number of free-text lines requested so far.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl OlcSession for TranscriptSession {
    fn send(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn request_line(&mut self, prompt: &str) {
        self.prompts += 1;
        self.send(prompt);
    }
}

/// Session over any blocking writer (stdout for the CLI editor).
pub struct WriterSession<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> WriterSession<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OlcSession for WriterSession<W> {
    fn send(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            // Report the first failure only.
            if !self.failed {
                warn!("Editor output failed: {}", e);
                self.failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_counts_prompts() {
        let mut s = TranscriptSession::new();
        s.send("menu\n");
        s.request_line("Enter: ");
        assert_eq!(s.contents(), "menu\nEnter: ");
        assert_eq!(s.prompts(), 1);
        assert_eq!(s.take(), "menu\nEnter: ");
        assert!(s.contents().is_empty());
    }

    #[test]
    fn writer_session_writes_through() {
        let mut s = WriterSession::new(Vec::new());
        s.send("hello ");
        s.request_line("name: ");
        assert_eq!(s.into_inner(), b"hello name: ".to_vec());
    }
}
