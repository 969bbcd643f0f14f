//! File system store repository

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Abstract repository for the todo store file.
///
/// The store file is the single source of truth; in-memory entry lists are
/// rebuilt from it on every command. Each write is one buffered call, no
/// locking: concurrent invocations may race (last rewrite wins) but must not
/// crash, which plain file operations already satisfy.
pub trait StoreRepository {
    /// Whether the store file exists yet.
    fn store_exists(&self) -> bool;

    /// Read the whole store. A missing file reads as an empty string.
    fn read_store(&self) -> Result<String>;

    /// Append content to the store, creating the file if needed. Existing
    /// bytes are never truncated.
    fn append_store(&self, content: &str) -> Result<()>;

    /// Replace the store contents wholesale.
    fn write_store(&self, content: &str) -> Result<()>;
}

/// File system implementation of StoreRepository.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreRepository for FileStore {
    fn store_exists(&self) -> bool {
        self.path.exists()
    }

    fn read_store(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn append_store(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_store(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
