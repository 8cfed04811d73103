use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::errors::SectrackError;

/// Source of interactive answers for commands that ask for input.
pub trait Prompter {
    /// Show `label` and read one line. End of input reads as an empty answer.
    fn prompt(&mut self, label: &str) -> Result<String, SectrackError>;
}

/// Line editor on a real terminal.
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self, SectrackError> {
        let editor = DefaultEditor::new()
            .map_err(|e| SectrackError::Prompt(format!("Failed to initialize terminal input: {}", e)))?;
        Ok(Self { editor })
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, label: &str) -> Result<String, SectrackError> {
        match self.editor.readline(label) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => Ok(String::new()),
            Err(ReadlineError::Interrupted) => Err(SectrackError::Prompt("input cancelled".into())),
            Err(e) => Err(SectrackError::Prompt(e.to_string())),
        }
    }
}

/// Reads answers line by line from any buffered reader, echoing labels to `echo`.
///
/// Used for piped stdin.
pub struct LinePrompter<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, label: &str) -> Result<String, SectrackError> {
        self.echo.write_all(label.as_bytes())?;
        self.echo.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
