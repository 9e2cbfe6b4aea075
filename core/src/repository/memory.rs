use std::cell::RefCell;

use crate::model::TaskCollection;
use crate::repository::traits::SnapshotRepository;

// In-memory medium holding the serialized snapshot text, so the degrade
// paths behave exactly like the file-backed one (including malformed data).
// Meant for tests and for running without a durable medium at all.
#[derive(Debug, Default)]
pub struct MemorySnapshotRepository {
    value: RefCell<Option<String>>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Seed the medium with a raw value, valid or not.
    pub fn with_value(raw: &str) -> Self {
        Self {
            value: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw_value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl SnapshotRepository for MemorySnapshotRepository {
    fn load(&self) -> TaskCollection {
        match self.value.borrow().as_deref() {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                log::warn!("discarding unreadable in-memory snapshot: {}", err);
                TaskCollection::new()
            }),
            None => TaskCollection::new(),
        }
    }

    fn save(&self, collection: &TaskCollection) {
        match serde_json::to_string(collection) {
            Ok(raw) => *self.value.borrow_mut() = Some(raw),
            Err(err) => log::warn!("failed to serialize snapshot: {}", err),
        }
    }
}
