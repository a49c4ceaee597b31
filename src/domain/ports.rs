use crate::utils::error::Result;

/// Line-oriented terminal the interactive session talks through.
pub trait Console {
    /// Next raw line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    fn write(&mut self, text: &str) -> Result<()>;

    /// First whitespace token of the next non-blank line. The rest of that line is dropped.
    fn read_token(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.read_line()? {
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }
}
