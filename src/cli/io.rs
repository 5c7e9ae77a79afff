//! Line input for the shell: rustyline when interactive, plain lines in script mode.

use std::io::BufRead;

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::core::errors::CliError;

/// One answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Ctrl-C.
    Interrupted,
    /// Ctrl-D or end of the input stream.
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError>;
}

/// Terminal input with line editing and in-session history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads answers line by line from any buffered reader, e.g. piped stdin.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<InputEvent, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(InputEvent::Eof);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(InputEvent::Line(trimmed.to_string()))
    }
}
