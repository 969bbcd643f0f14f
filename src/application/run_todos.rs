//! Run todos use case: prompt for answers and append them to the store

use crate::domain::store::render_batch;
use crate::domain::{Entry, Question, NOTHING_ANSWER};
use crate::error::{PeterError, Result};
use crate::infrastructure::config::{create_default_config, load_config};
use crate::infrastructure::{Interaction, StoreRepository};
use std::path::Path;

/// What the run flow ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// No config existed; a default one was written and nothing else ran.
    ConfigCreated,
    /// This many answers were appended to the store.
    Saved(usize),
}

/// Service for the answer-collection flow.
pub struct RunService<S: StoreRepository> {
    store: S,
}

impl<S: StoreRepository> RunService<S> {
    pub fn new(store: S) -> Self {
        RunService { store }
    }

    /// Ask every configured question and append the batch under `date`.
    ///
    /// A missing config file is bootstrapped instead of answered. End of
    /// input at any prompt cancels the whole batch; nothing is written in
    /// that case.
    pub fn execute(
        &self,
        ui: &mut dyn Interaction,
        config_path: &Path,
        date: &str,
    ) -> Result<RunOutcome> {
        if !config_path.exists() {
            println!("No config found at '{}'. Creating default configuration...", config_path.display());
            create_default_config(config_path)?;
            println!(
                "Default config created. Edit '{}' with your questions and run peter again.",
                config_path.display()
            );
            return Ok(RunOutcome::ConfigCreated);
        }

        let questions = load_config(config_path)?;
        if questions.is_empty() {
            return Err(PeterError::ConfigEmpty(
                config_path.display().to_string(),
            ));
        }

        println!("Daily Todo Manager - {}", date);
        println!("Answer the following questions (Ctrl+D to cancel):");
        println!();

        let mut entries = Vec::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            println!("Question {}: {}", i + 1, question.question);

            let priority = self.ask_priority(ui, question)?;
            let answer = self.ask_answer(ui)?;

            entries.push(Entry::new(
                question.question.clone(),
                answer,
                priority,
                date.to_string(),
            ));
            println!();
        }

        let include_title = !self.store.store_exists();
        let content = render_batch(&entries, date, include_title);
        self.store.append_store(&content)?;

        println!("Saved {} todos for {}", entries.len(), date);
        Ok(RunOutcome::Saved(entries.len()))
    }

    /// Read a priority: empty input keeps the question's default, invalid
    /// input is re-prompted.
    fn ask_priority(&self, ui: &mut dyn Interaction, question: &Question) -> Result<u32> {
        loop {
            let prompt = format!("Priority (default {}): ", question.priority);
            let input = ui.prompt_line(&prompt)?.ok_or(PeterError::Cancelled)?;
            let trimmed = input.trim();

            if trimmed.is_empty() {
                return Ok(question.priority);
            }
            match trimmed.parse::<u32>() {
                Ok(priority) => return Ok(priority),
                Err(_) => println!("Invalid priority '{}', enter a number", trimmed),
            }
        }
    }

    /// Read an answer; empty input becomes the sentinel.
    fn ask_answer(&self, ui: &mut dyn Interaction) -> Result<String> {
        let input = ui.prompt_line("Answer: ")?.ok_or(PeterError::Cancelled)?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            Ok(NOTHING_ANSWER.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::parse_store;
    use crate::infrastructure::{FileStore, ScriptedInteraction};
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(".peter");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_bootstraps_missing_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".peter");
        let service = RunService::new(FileStore::new(temp.path().join("peter.md")));
        let mut ui = ScriptedInteraction::new(&[]);

        let outcome = service.execute(&mut ui, &config_path, "2026-01-02").unwrap();

        assert_eq!(outcome, RunOutcome::ConfigCreated);
        assert!(config_path.exists());
        assert!(!temp.path().join("peter.md").exists());
    }

    #[test]
    fn test_collects_and_appends_batch() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "- What now? [priority:2]\n- Next?\n");
        let store = FileStore::new(temp.path().join("peter.md"));
        let service = RunService::new(store.clone());

        // First question: keep default priority, answer. Second: explicit
        // priority, empty answer becomes the sentinel.
        let mut ui = ScriptedInteraction::new(&["", "write tests", "1", ""]);

        let outcome = service.execute(&mut ui, &config_path, "2026-01-02").unwrap();
        assert_eq!(outcome, RunOutcome::Saved(2));

        let entries = parse_store(&store.read_store().unwrap()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "What now?");
        assert_eq!(entries[0].answer, "write tests");
        assert_eq!(entries[0].priority, 2);
        assert_eq!(entries[0].date, "2026-01-02");
        assert_eq!(entries[1].answer, "nothing");
        assert_eq!(entries[1].priority, 1);
    }

    #[test]
    fn test_invalid_priority_reprompts() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "- Only question\n");
        let store = FileStore::new(temp.path().join("peter.md"));
        let service = RunService::new(store.clone());

        let mut ui = ScriptedInteraction::new(&["high", "5", "done"]);

        service.execute(&mut ui, &config_path, "2026-01-02").unwrap();

        let entries = parse_store(&store.read_store().unwrap()).unwrap();
        assert_eq!(entries[0].priority, 5);
        assert_eq!(entries[0].answer, "done");
    }

    #[test]
    fn test_cancel_mid_batch_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "- First?\n- Second?\n");
        let store_path = temp.path().join("peter.md");
        let service = RunService::new(FileStore::new(store_path.clone()));

        // Answer the first question, then input ends before the second.
        let mut ui = ScriptedInteraction::new(&["1", "partial answer"]);

        let result = service.execute(&mut ui, &config_path, "2026-01-02");
        assert!(matches!(result, Err(PeterError::Cancelled)));
        assert!(!store_path.exists());
    }

    #[test]
    fn test_empty_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "# No questions here\n");
        let service = RunService::new(FileStore::new(temp.path().join("peter.md")));
        let mut ui = ScriptedInteraction::new(&[]);

        let result = service.execute(&mut ui, &config_path, "2026-01-02");
        assert!(matches!(result, Err(PeterError::ConfigEmpty(_))));
    }

    #[test]
    fn test_second_append_keeps_single_title() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "- Q?\n");
        let store = FileStore::new(temp.path().join("peter.md"));
        let service = RunService::new(store.clone());

        let mut ui = ScriptedInteraction::new(&["", "day one"]);
        service.execute(&mut ui, &config_path, "2026-01-01").unwrap();

        let mut ui = ScriptedInteraction::new(&["", "day two"]);
        service.execute(&mut ui, &config_path, "2026-01-02").unwrap();

        let content = store.read_store().unwrap();
        assert_eq!(content.matches("# Daily Todos").count(), 1);
        assert_eq!(content.matches("## 2026-01-01").count(), 1);
        assert_eq!(content.matches("## 2026-01-02").count(), 1);
    }
}
