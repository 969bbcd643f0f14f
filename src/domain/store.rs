//! Markdown store codec
//!
//! The store file is plain markdown: a single title line, `## <date>`
//! sections, and per entry a short block of marker lines. Everything here is
//! a pure function of text; file I/O lives in the infrastructure layer.
//!
//! Two encodings exist on purpose: the append path writes question, answer,
//! and priority only (fresh answers are open until told otherwise), while the
//! full rewrite also writes an explicit completed line for every entry.

use crate::domain::entry::{Entry, NOTHING_ANSWER, UNSET_PRIORITY};
use crate::error::{PeterError, Result};
use std::collections::BTreeMap;

/// Title line emitted when the store file is first created.
pub const STORE_TITLE: &str = "# Daily Todos";

const DATE_MARKER: &str = "## ";
const QUESTION_MARKER: &str = "- **Question**: ";
const ANSWER_MARKER: &str = "  - **Answer**: ";
const PRIORITY_MARKER: &str = "  - **Priority**: ";
const COMPLETED_MARKER: &str = "  - **Completed**: ";

/// Render a freshly collected batch of entries for one date, for appending.
///
/// When `include_title` is set (missing store file) the title line comes
/// first. The batch may be empty; the date heading is emitted regardless.
/// Completion status is never written here.
pub fn render_batch(entries: &[Entry], date: &str, include_title: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    if include_title {
        lines.push(STORE_TITLE.to_string());
        lines.push(String::new());
    }

    lines.push(format!("{}{}", DATE_MARKER, date));
    lines.push(String::new());

    for entry in entries {
        push_entry_lines(&mut lines, entry, false);
    }

    lines.join("\n")
}

/// Render the entire entry list for a full rewrite.
///
/// Entries are grouped by date and dates emitted in sorted order, which for
/// ISO dates is chronological. Within a date, entries keep the order of the
/// input list. Every block carries an explicit completed line. Output is
/// deterministic: the same list always produces the same bytes.
pub fn render_store(entries: &[Entry]) -> String {
    let mut by_date: BTreeMap<&str, Vec<&Entry>> = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date.as_str()).or_default().push(entry);
    }

    let mut lines: Vec<String> = vec![STORE_TITLE.to_string(), String::new()];

    for (date, group) in by_date {
        lines.push(format!("{}{}", DATE_MARKER, date));
        lines.push(String::new());

        for entry in group {
            push_entry_lines(&mut lines, entry, true);
        }
    }

    lines.join("\n")
}

fn push_entry_lines(lines: &mut Vec<String>, entry: &Entry, with_status: bool) {
    lines.push(format!("{}{}", QUESTION_MARKER, entry.question));
    lines.push(format!("{}{}", ANSWER_MARKER, entry.answer));
    lines.push(format!("{}{}", PRIORITY_MARKER, entry.priority));
    if with_status {
        lines.push(format!("{}{}", COMPLETED_MARKER, entry.completed));
    }
    lines.push(String::new());
}

/// Parse the full store text into structured entries.
///
/// A sequential line scan: `## ` headings update the current date, a question
/// marker starts a new entry inheriting it, and follower lines up to the next
/// question marker or heading fill in answer, priority, and completed status.
/// Missing followers fall back to defaults (sentinel answer, priority 999,
/// not completed). A non-integer priority fails the whole parse.
pub fn parse_store(content: &str) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut current_date = String::new();
    let mut current: Option<Entry> = None;

    for line in content.lines() {
        if let Some(date) = line.strip_prefix(DATE_MARKER) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current_date = date.trim().to_string();
        } else if let Some(question) = line.strip_prefix(QUESTION_MARKER) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(Entry::new(
                question.to_string(),
                NOTHING_ANSWER.to_string(),
                UNSET_PRIORITY,
                current_date.clone(),
            ));
        } else if let Some(answer) = line.strip_prefix(ANSWER_MARKER) {
            if let Some(entry) = current.as_mut() {
                entry.answer = answer.to_string();
            }
        } else if let Some(priority) = line.strip_prefix(PRIORITY_MARKER) {
            if let Some(entry) = current.as_mut() {
                entry.priority = priority.trim().parse::<u32>().map_err(|_| {
                    PeterError::MalformedStore(format!(
                        "invalid priority '{}' for question '{}'",
                        priority.trim(),
                        entry.question
                    ))
                })?;
            }
        } else if let Some(completed) = line.strip_prefix(COMPLETED_MARKER) {
            if let Some(entry) = current.as_mut() {
                entry.completed = completed.trim().eq_ignore_ascii_case("true");
            }
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    Ok(entries)
}
