//! Config question model

/// Default priority for config questions without an explicit marker.
pub const DEFAULT_PRIORITY: u32 = 3;

/// A question from the config file, with its default priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub priority: u32,
}

impl Question {
    pub fn new(question: String, priority: u32) -> Self {
        Question { question, priority }
    }
}
