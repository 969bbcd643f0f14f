//! Infrastructure layer - File system and terminal interaction

pub mod config;
pub mod prompt;
pub mod repository;

pub use prompt::{Interaction, ScriptedInteraction, StdInteraction};
pub use repository::{FileStore, StoreRepository};
