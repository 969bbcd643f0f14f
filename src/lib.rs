//! peter - Daily journaling/todo CLI
//!
//! Asks a configurable set of questions, records the answers with priorities
//! into a dated markdown store, and lets the user list, review, and close
//! the recorded entries later.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PeterError;
