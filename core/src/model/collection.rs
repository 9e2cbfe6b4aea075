use serde::{Deserialize, Serialize};

use crate::model::task::Task;

// The whole persisted state. Serializes to {"tasks": [...]}, which is the
// exact snapshot layout written by the persistence bridge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TaskCollection {
    pub tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
