//! Close todos use case: select open entries and mark them completed

use crate::domain::store::{parse_store, render_store};
use crate::domain::Entry;
use crate::error::{PeterError, Result};
use crate::infrastructure::{Interaction, StoreRepository};

/// What the close flow ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The store holds no open entries; nothing to select.
    NothingOpen,
    /// The user selected nothing; the store was left untouched.
    NoneSelected,
    /// This many entries were marked completed and the store rewritten.
    Closed(usize),
}

/// Service for the interactive closing flow.
pub struct CloseService<S: StoreRepository> {
    store: S,
}

impl<S: StoreRepository> CloseService<S> {
    pub fn new(store: S) -> Self {
        CloseService { store }
    }

    /// Present the open entries, mark the selected ones completed in the
    /// full list, and persist it with a full rewrite.
    ///
    /// Selections correlate back to the full list through the entry's
    /// position assigned at parse time. Two textually identical entries are
    /// therefore distinct choices and only the chosen one is closed.
    pub fn execute(&self, ui: &mut dyn Interaction) -> Result<CloseOutcome> {
        let mut entries = parse_store(&self.store.read_store()?)?;

        // (position in full list, display label) per open entry
        let open: Vec<(usize, String)> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_open())
            .map(|(i, e)| (i, choice_label(e)))
            .collect();

        if open.is_empty() {
            return Ok(CloseOutcome::NothingOpen);
        }

        let labels: Vec<String> = open.iter().map(|(_, label)| label.clone()).collect();
        let selected = ui
            .select_indices(&labels)?
            .ok_or(PeterError::Cancelled)?;

        if selected.is_empty() {
            return Ok(CloseOutcome::NoneSelected);
        }

        for choice in &selected {
            let position = open[*choice].0;
            entries[position].completed = true;
        }

        self.store.write_store(&render_store(&entries))?;
        Ok(CloseOutcome::Closed(selected.len()))
    }
}

fn choice_label(entry: &Entry) -> String {
    format!(
        "[{}] (priority {}) {}: {}",
        entry.date, entry.priority, entry.question, entry.answer
    )
}
