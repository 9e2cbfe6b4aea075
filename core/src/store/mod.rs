pub mod task_store;

// Re-export
pub use task_store::{SubscriptionId, TaskStore};
