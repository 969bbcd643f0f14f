//! Output formatting utilities

use crate::domain::Entry;

/// Format open entries for the `list` command.
pub fn format_open_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No open todos".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  p{}  {}: {}\n",
            entry.date, entry.priority, entry.question, entry.answer
        ));
    }
    output
}

/// Format all entries with completion marks for the `status` command.
pub fn format_status_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No todos recorded".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let mark = if entry.completed { "[x]" } else { "[ ]" };
        output.push_str(&format!(
            "{} {}  p{}  {}: {}\n",
            mark, entry.date, entry.priority, entry.question, entry.answer
        ));
    }
    output
}
