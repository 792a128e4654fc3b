pub mod error;
pub mod store;
pub mod task;

pub use error::StoreError;
pub use store::TaskStore;
pub use task::{Task, TaskId, TaskStatus};
