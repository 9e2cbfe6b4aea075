use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    // Opaque token supplied by the caller. The store neither generates ids
    // nor checks them for uniqueness; that contract lives with the frontend.
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: String, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
        }
    }
}
