use crate::model::TaskCollection;

// Persistence bridge for the task snapshot. Both operations are total:
// load degrades to the empty collection, save degrades to a no-op.
// Failures are reported through the `log` facade, never to the caller.
pub trait SnapshotRepository {
    fn load(&self) -> TaskCollection;
    fn save(&self, collection: &TaskCollection);
}
