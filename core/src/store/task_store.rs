use crate::model::{Task, TaskCollection};
use crate::repository::SnapshotRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn Fn(&TaskCollection)>,
}

// State container for the task collection. Transitions are synchronous and
// total: an unmatched id is a no-op, never an error, and the caller is not
// told which one happened. Every operation re-persists the full snapshot
// and notifies subscribers, whether or not anything matched.
pub struct TaskStore<R: SnapshotRepository> {
    repository: R,
    state: TaskCollection,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl<R: SnapshotRepository> TaskStore<R> {
    pub fn new(repository: R) -> Self {
        let state = repository.load();
        Self {
            repository,
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // Current state. Callers must treat this as an immutable snapshot.
    pub fn snapshot(&self) -> &TaskCollection {
        &self.state
    }

    pub fn add_task(&mut self, task: Task) {
        // No duplicate-id check: the collection accepts whatever the caller
        // supplies, duplicates included.
        self.state.tasks.push(task);
        self.commit();
    }

    pub fn update_task(&mut self, task: Task) {
        // Wholesale replacement of every task carrying this id.
        for existing in &mut self.state.tasks {
            if existing.id == task.id {
                *existing = task.clone();
            }
        }
        self.commit();
    }

    pub fn delete_task(&mut self, id: &str) {
        self.state.tasks.retain(|task| task.id != id);
        self.commit();
    }

    pub fn toggle_task_complete(&mut self, id: &str) {
        // Only the first match flips, even if duplicates exist.
        if let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
        }
        self.commit();
    }

    pub fn subscribe(&mut self, callback: impl Fn(&TaskCollection) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
    }

    fn commit(&mut self) {
        self.repository.save(&self.state);
        for subscriber in &self.subscribers {
            (subscriber.callback)(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Repository double that hands out a fixed initial state and records
    // every snapshot the store asks it to persist.
    struct RecordingRepository {
        initial: TaskCollection,
        saves: Rc<RefCell<Vec<TaskCollection>>>,
    }

    impl RecordingRepository {
        fn empty() -> (Self, Rc<RefCell<Vec<TaskCollection>>>) {
            Self::with_initial(TaskCollection::new())
        }

        fn with_initial(initial: TaskCollection) -> (Self, Rc<RefCell<Vec<TaskCollection>>>) {
            let saves = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    initial,
                    saves: Rc::clone(&saves),
                },
                saves,
            )
        }
    }

    impl SnapshotRepository for RecordingRepository {
        fn load(&self) -> TaskCollection {
            self.initial.clone()
        }

        fn save(&self, collection: &TaskCollection) {
            self.saves.borrow_mut().push(collection.clone());
        }
    }

    fn task(id: &str, title: &str) -> Task {
        Task::new(id.to_string(), title.to_string(), String::new())
    }

    #[test]
    fn test_new_loads_persisted_state() {
        let initial = TaskCollection {
            tasks: vec![task("1", "Buy milk")],
        };
        let (repo, _saves) = RecordingRepository::with_initial(initial.clone());

        let store = TaskStore::new(repo);
        assert_eq!(store.snapshot(), &initial);
    }

    #[test]
    fn test_add_appends_in_order() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);

        store.add_task(task("1", "first"));
        store.add_task(task("2", "second"));
        store.add_task(task("3", "third"));

        let ids: Vec<&str> = store
            .snapshot()
            .tasks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_add_permits_duplicate_ids() {
        // Uniqueness is the caller's responsibility; the store accepts
        // colliding ids without complaint.
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);

        store.add_task(task("1", "original"));
        store.add_task(task("1", "impostor"));

        let matching: Vec<&Task> = store
            .snapshot()
            .tasks
            .iter()
            .filter(|t| t.id == "1")
            .collect();
        assert_eq!(matching.len(), 2);
        assert_eq!(matching[0].title, "original");
        assert_eq!(matching[1].title, "impostor");
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "Buy milk"));

        let mut replacement = task("1", "Buy milk");
        replacement.description = "2%".to_string();
        replacement.completed = true;
        store.update_task(replacement.clone());

        assert_eq!(store.snapshot().tasks, vec![replacement]);
    }

    #[test]
    fn test_update_unmatched_leaves_state_but_still_persists() {
        let (repo, saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "Buy milk"));

        let before = store.snapshot().clone();
        let saves_before = saves.borrow().len();

        store.update_task(task("missing", "ghost"));

        assert_eq!(store.snapshot(), &before);
        // The unchanged collection is re-written regardless.
        assert_eq!(saves.borrow().len(), saves_before + 1);
        assert_eq!(saves.borrow().last().unwrap(), &before);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "first"));
        store.add_task(task("2", "keep me"));
        store.add_task(task("1", "duplicate"));

        store.delete_task("1");

        let ids: Vec<&str> = store
            .snapshot()
            .tasks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_delete_unmatched_is_noop() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "Buy milk"));

        let before = store.snapshot().clone();
        store.delete_task("missing");
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_toggle_flips_first_match_only() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "first copy"));
        store.add_task(task("1", "second copy"));

        store.toggle_task_complete("1");

        let flags: Vec<bool> = store.snapshot().tasks.iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_toggle_twice_restores_original_flag() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "Buy milk"));

        store.toggle_task_complete("1");
        store.toggle_task_complete("1");

        assert!(!store.snapshot().tasks[0].completed);
    }

    #[test]
    fn test_toggle_unmatched_is_noop() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);
        store.add_task(task("1", "Buy milk"));

        let before = store.snapshot().clone();
        store.toggle_task_complete("missing");
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_subscribers_see_every_commit() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |collection| {
            sink.borrow_mut().push(collection.clone());
        });

        store.add_task(task("1", "Buy milk"));
        store.toggle_task_complete("1");
        store.delete_task("missing");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].tasks[0].title, "Buy milk");
        assert!(seen[1].tasks[0].completed);
        // No-op commits notify too, with the unchanged snapshot.
        assert_eq!(seen[2], seen[1]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let (repo, _saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);

        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let subscription = store.subscribe(move |_| {
            *sink.borrow_mut() += 1;
        });

        store.add_task(task("1", "Buy milk"));
        store.unsubscribe(subscription);
        store.add_task(task("2", "Call Bob"));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_store_over_memory_medium() {
        use crate::repository::MemorySnapshotRepository;

        let repo = MemorySnapshotRepository::with_value(
            "{\"tasks\":[{\"id\":\"1\",\"title\":\"Buy milk\",\"description\":\"\",\"completed\":false}]}",
        );
        let mut store = TaskStore::new(repo);
        assert_eq!(store.snapshot().tasks.len(), 1);

        store.toggle_task_complete("1");
        assert!(store.snapshot().tasks[0].completed);
    }

    #[test]
    fn test_crud_scenario() {
        let (repo, saves) = RecordingRepository::empty();
        let mut store = TaskStore::new(repo);

        store.add_task(task("1", "Buy milk"));
        assert_eq!(store.snapshot().tasks.len(), 1);
        assert!(!store.snapshot().tasks[0].completed);

        store.toggle_task_complete("1");
        assert!(store.snapshot().tasks[0].completed);

        let mut edited = task("1", "Buy milk");
        edited.description = "2%".to_string();
        edited.completed = true;
        store.update_task(edited);
        assert_eq!(store.snapshot().tasks[0].description, "2%");

        store.delete_task("1");
        assert!(store.snapshot().is_empty());

        // One persisted snapshot per operation.
        assert_eq!(saves.borrow().len(), 4);
    }
}
