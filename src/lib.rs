// task-cli - Task tracking backed by a single JSON file

pub mod error;
pub mod storage;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use error::TaskError;
pub use store::{TaskStore, next_id};
pub use task::{MIN_DESCRIPTION_LEN, Status, Task, validate_description};
