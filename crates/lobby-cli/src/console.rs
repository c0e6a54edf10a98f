//! Terminal implementation of the lobby's output sink.

use std::io::{self, Write};

use lobby_core::OutputSink;
use owo_colors::OwoColorize;

/// Writes lobby output to stdout in green, notices in yellow.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line.green());
    }

    fn write_notice(&mut self, line: &str) {
        println!("{}", line.yellow());
    }

    fn write_prompt(&mut self, prompt: &str) {
        print!("{}", prompt.green());
        io::stdout().flush().ok();
    }
}
