//! List todos use case

use crate::domain::store::parse_store;
use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::StoreRepository;

/// Service producing the listing views over the store.
pub struct ListService<S: StoreRepository> {
    store: S,
}

impl<S: StoreRepository> ListService<S> {
    pub fn new(store: S) -> Self {
        ListService { store }
    }

    /// Open entries: not completed and not holding the sentinel answer.
    pub fn open_entries(&self) -> Result<Vec<Entry>> {
        let entries = parse_store(&self.store.read_store()?)?;
        Ok(entries.into_iter().filter(Entry::is_open).collect())
    }

    /// All entries with their completion state. Sentinel answers are
    /// filtered here too; they represent "no response" and are only kept in
    /// the file for history.
    pub fn status_entries(&self) -> Result<Vec<Entry>> {
        let entries = parse_store(&self.store.read_store()?)?;
        Ok(entries.into_iter().filter(|e| !e.is_sentinel()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::render_store;
    use crate::infrastructure::FileStore;
    use tempfile::TempDir;

    fn seeded_service(entries: Vec<Entry>) -> (TempDir, ListService<FileStore>) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("peter.md"));
        store
            .write_store(&render_store(&entries))
            .expect("seed store");
        (temp, ListService::new(store))
    }

    fn entry(question: &str, answer: &str, completed: bool) -> Entry {
        Entry {
            question: question.to_string(),
            answer: answer.to_string(),
            priority: 1,
            completed,
            date: "2026-01-02".to_string(),
        }
    }

    #[test]
    fn test_open_excludes_sentinel_and_completed() {
        let (_temp, service) = seeded_service(vec![
            entry("Open one", "answered", false),
            entry("No response", "nothing", false),
            entry("Already done", "answered", true),
        ]);

        let open = service.open_entries().unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].question, "Open one");
    }

    #[test]
    fn test_status_shows_completed_but_not_sentinel() {
        let (_temp, service) = seeded_service(vec![
            entry("Open one", "answered", false),
            entry("No response", "nothing", false),
            entry("Already done", "answered", true),
        ]);

        let all = service.status_entries().unwrap();
        let questions: Vec<&str> = all.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["Open one", "Already done"]);
    }

    #[test]
    fn test_sentinel_excluded_even_when_completed() {
        let (_temp, service) = seeded_service(vec![entry("Skipped", "nothing", true)]);

        assert!(service.open_entries().unwrap().is_empty());
        assert!(service.status_entries().unwrap().is_empty());
    }

    #[test]
    fn test_missing_store_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let service = ListService::new(FileStore::new(temp.path().join("peter.md")));

        assert!(service.open_entries().unwrap().is_empty());
        assert!(service.status_entries().unwrap().is_empty());
    }
}
