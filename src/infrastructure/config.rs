//! Question config file handling
//!
//! The config file (default `.peter`) is a markdown bullet list. Lines
//! starting with `- ` or `* ` are questions; an optional inline
//! `[priority:<int>]` marker sets the question's priority and is stripped
//! from the displayed text.

use crate::domain::question::DEFAULT_PRIORITY;
use crate::domain::Question;
use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn priority_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[priority:(\d+)\]").unwrap())
}

const DEFAULT_CONFIG: &str = "\
# Daily Todo Questions

- What are your top 3 priorities for today? [priority:3]
- What potential obstacles might you face? [priority:2]
- What progress have you made on your priorities? [priority:3]
- What adjustments do you need to make? [priority:2]
- What did you accomplish today? [priority:1]
- What are you looking forward to tomorrow? [priority:1]
";

/// Load questions with priorities from the config file.
pub fn load_config(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_config(&content))
}

/// Parse config text into questions. Non-bullet lines are ignored; bullets
/// that are empty after stripping the priority marker are skipped.
pub fn parse_config(content: &str) -> Vec<Question> {
    let mut questions = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        let text = match line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            Some(rest) => rest.trim(),
            None => continue,
        };

        let mut priority = DEFAULT_PRIORITY;
        if let Some(captures) = priority_regex().captures(text) {
            if let Ok(value) = captures[1].parse::<u32>() {
                priority = value;
            }
        }

        let question = priority_regex().replace_all(text, "").trim().to_string();
        if !question.is_empty() {
            questions.push(Question::new(question, priority));
        }
    }

    questions
}

/// Write the default config file with the standard daily-review questions.
pub fn create_default_config(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
