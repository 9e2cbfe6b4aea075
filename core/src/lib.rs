pub mod input;
pub mod model;
pub mod repository;
pub mod store;

pub use input::{parse_input, ParsedInput};
pub use model::{Task, TaskCollection};
pub use repository::{FileSnapshotRepository, MemorySnapshotRepository, SnapshotRepository};
pub use store::{SubscriptionId, TaskStore};
