//! Todo entry model

/// Reserved answer value meaning "no response given". Entries carrying it are
/// kept in storage for history but excluded from open-item views.
pub const NOTHING_ANSWER: &str = "nothing";

/// Priority assigned when a stored entry has no priority line.
pub const UNSET_PRIORITY: u32 = 999;

/// One question/answer/priority/completion/date record in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub question: String,
    pub answer: String,
    pub priority: u32,
    pub completed: bool,
    /// ISO date (YYYY-MM-DD) of the section this entry belongs to.
    pub date: String,
}

impl Entry {
    pub fn new(question: String, answer: String, priority: u32, date: String) -> Self {
        Entry {
            question,
            answer,
            priority,
            completed: false,
            date,
        }
    }

    /// An entry is open when it is not completed and holds a real answer.
    pub fn is_open(&self) -> bool {
        !self.completed && self.answer != NOTHING_ANSWER
    }

    /// Whether the entry holds the "no response given" sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.answer == NOTHING_ANSWER
    }
}
