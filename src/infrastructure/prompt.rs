//! Terminal interaction
//!
//! A narrow capability the services depend on: read one line for a prompt,
//! or present N labeled choices and get back selected indices. The core
//! never talks to a concrete UI toolkit, so the backend is swappable; the
//! production backend is plain stdin/stdout and tests use a scripted one.

use crate::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Interactive capability used by the run and close flows.
pub trait Interaction {
    /// Show a prompt and read one line of input. `None` means end of input
    /// (Ctrl+D / closed pipe) and is treated as cancellation by callers.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Present labeled choices and return the selected zero-based indices,
    /// or `None` on cancellation. Invalid input is re-prompted, an empty
    /// line selects nothing.
    fn select_indices(&mut self, labels: &[String]) -> Result<Option<Vec<usize>>>;
}

/// Outcome of parsing one line of selection input.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionInput {
    /// Valid zero-based indices, deduplicated, in input order.
    Indices(Vec<usize>),
    /// Empty line: select nothing.
    Nothing,
    /// Non-numeric or out-of-range token; the message explains which.
    Invalid(String),
}

/// Parse whitespace- or comma-separated 1-based indices against `count`
/// available choices.
pub fn parse_selection(input: &str, count: usize) -> SelectionInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SelectionInput::Nothing;
    }

    let mut indices: Vec<usize> = Vec::new();
    for token in trimmed.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(n) if n >= 1 && n <= count => {
                let index = n - 1;
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
            Ok(n) => {
                return SelectionInput::Invalid(format!(
                    "'{}' is out of range (choose 1-{})",
                    n, count
                ));
            }
            Err(_) => {
                return SelectionInput::Invalid(format!("'{}' is not a number", token));
            }
        }
    }

    SelectionInput::Indices(indices)
}

/// Stdin/stdout backed interaction.
pub struct StdInteraction;

impl StdInteraction {
    pub fn new() -> Self {
        StdInteraction
    }

    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for StdInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for StdInteraction {
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        self.read_line()
    }

    fn select_indices(&mut self, labels: &[String]) -> Result<Option<Vec<usize>>> {
        for (i, label) in labels.iter().enumerate() {
            println!("{}. {}", i + 1, label);
        }

        loop {
            let line = match self.prompt_line("Select (e.g. 1 3), empty for none: ")? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_selection(&line, labels.len()) {
                SelectionInput::Indices(indices) => return Ok(Some(indices)),
                SelectionInput::Nothing => return Ok(Some(Vec::new())),
                SelectionInput::Invalid(msg) => {
                    println!("Invalid selection: {}", msg);
                }
            }
        }
    }
}

/// Scripted interaction that replays canned input lines. Used by tests.
pub struct ScriptedInteraction {
    lines: VecDeque<String>,
}

impl ScriptedInteraction {
    pub fn new(lines: &[&str]) -> Self {
        ScriptedInteraction {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn select_indices(&mut self, labels: &[String]) -> Result<Option<Vec<usize>>> {
        loop {
            let line = match self.lines.pop_front() {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_selection(&line, labels.len()) {
                SelectionInput::Indices(indices) => return Ok(Some(indices)),
                SelectionInput::Nothing => return Ok(Some(Vec::new())),
                SelectionInput::Invalid(_) => continue,
            }
        }
    }
}
