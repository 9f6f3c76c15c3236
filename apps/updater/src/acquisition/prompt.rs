use std::io::{BufRead, Write};

use tracing::warn;

use crate::errors::AppError;

/// Sentinel that ends every repeated-entry loop.
pub const DONE: &str = "done";

pub fn is_done(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(DONE)
}

/// Where interactive answers come from. The terminal in production, a script in tests.
pub trait LineSource {
    /// Shows `prompt` and returns the next line without its line ending.
    /// `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Prints informational text (section banners, progress).
    fn say(&mut self, message: &str);

    /// Trimmed answer; a closed input is an error.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        match self.read_line(prompt)? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(AppError::InputClosed),
        }
    }

    /// Integer answer. Blank → `default`; unparsable → `default` with a warning.
    fn ask_number(&mut self, prompt: &str, default: i32) -> Result<i32, AppError> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<i32>() {
            Ok(n) => Ok(n),
            Err(_) => {
                warn!("'{answer}' is not a number; using {default}");
                Ok(default)
            }
        }
    }

    /// Collects raw lines until a `done` line; returns them joined with `\n`.
    fn ask_block(&mut self, prompt: &str) -> Result<String, AppError> {
        let mut lines = Vec::new();
        loop {
            let line = self.read_line(prompt)?.ok_or(AppError::InputClosed)?;
            if is_done(&line) {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}

/// Reads answers from stdin, printing prompts to stdout.
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Replays a fixed list of answers and records every prompt shown.
#[cfg(test)]
pub struct ScriptedSource {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn say(&mut self, _message: &str) {}
}
