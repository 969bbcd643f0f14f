//! Application layer - Use cases and orchestration

pub mod close_todos;
pub mod list_todos;
pub mod run_todos;

pub use close_todos::{CloseOutcome, CloseService};
pub use list_todos::ListService;
pub use run_todos::{RunOutcome, RunService};
