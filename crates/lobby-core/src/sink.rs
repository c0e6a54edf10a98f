//! User-facing output.
//!
//! The lobby never prints directly; it reports through an [`OutputSink`]
//! supplied by whoever drives it.

/// Destination for lines shown to the user.
pub trait OutputSink {
    /// Regular output (listings, confirmations)
    fn write_line(&mut self, line: &str);

    /// Informational notice for a failed or skipped operation
    fn write_notice(&mut self, line: &str) {
        self.write_line(line);
    }

    /// Prompt shown right before reading input. Terminals keep the cursor
    /// on the same line.
    fn write_prompt(&mut self, prompt: &str) {
        self.write_line(prompt);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }

    fn write_notice(&mut self, line: &str) {
        (**self).write_notice(line);
    }

    fn write_prompt(&mut self, prompt: &str) {
        (**self).write_prompt(prompt);
    }
}

/// Collects output in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
