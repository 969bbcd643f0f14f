//! Domain layer - Entry/question models and the markdown store codec

pub mod entry;
pub mod question;
pub mod store;

pub use entry::{Entry, NOTHING_ANSWER};
pub use question::Question;
