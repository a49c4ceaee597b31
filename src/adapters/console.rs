use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Console over any buffered reader and writer; `StdConsole::stdio()` wires the terminal.
pub struct StdConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 is user input like any other; the parsers reject it.
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        // Prompts have no newline, so flush every write.
        self.writer.flush()?;
        Ok(())
    }
}

/// Scripted console for tests: fixed input lines, captured output.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: String,
}

impl MemoryConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Console for MemoryConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}
