use std::cell::RefCell;
use std::rc::Rc;

use ratatui::widgets::TableState;
use taskpad_core::{parse_input, FileSnapshotRepository, Task, TaskStore};
use uuid::Uuid;

pub enum InputMode {
    Normal,
    Adding,
    Editing,
}

pub struct App {
    pub store: TaskStore<FileSnapshotRepository>,
    // Render cache, kept current by a store subscription so every committed
    // mutation is visible on the next draw.
    pub tasks: Rc<RefCell<Vec<Task>>>,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
}

impl App {
    pub fn new() -> App {
        let repository =
            FileSnapshotRepository::new(None).expect("Failed to initialize repository");
        let mut store = TaskStore::new(repository);

        let tasks = Rc::new(RefCell::new(store.snapshot().tasks.clone()));
        let cache = Rc::clone(&tasks);
        store.subscribe(move |collection| {
            *cache.borrow_mut() = collection.tasks.clone();
        });

        let mut state = TableState::default();
        if !tasks.borrow().is_empty() {
            state.select(Some(0));
        }
        App {
            store,
            tasks,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
        }
    }

    fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    // Clone out of the cache; holding the borrow across a store call would
    // collide with the subscription refreshing it.
    fn selected_task(&self) -> Option<Task> {
        self.state
            .selected()
            .and_then(|i| self.tasks.borrow().get(i).cloned())
    }

    pub fn next(&mut self) {
        let len = self.task_count();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.task_count();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.store.toggle_task_complete(&task.id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(task) = self.selected_task() {
                self.store.delete_task(&task.id);
            }

            // Reseat the selection after the cache shrinks.
            let len = self.task_count();
            if len == 0 {
                self.state.select(None);
            } else if i >= len {
                self.state.select(Some(len - 1));
            } else {
                self.state.select(Some(i));
            }
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn enter_edit_mode(&mut self) {
        if let Some(task) = self.selected_task() {
            self.input_mode = InputMode::Editing;
            // Prefill with the current values so editing starts from them.
            self.input = if task.description.is_empty() {
                task.title
            } else {
                format!("{} :: {}", task.title, task.description)
            };
            self.cursor_position = self.input.chars().count();
        }
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        match self.input_mode {
            InputMode::Adding => self.submit_add(),
            InputMode::Editing => self.submit_edit(),
            InputMode::Normal => {}
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn submit_add(&mut self) {
        let parsed = parse_input(&self.input);
        if parsed.title.is_empty() {
            return;
        }

        let task = Task::new(
            Uuid::new_v4().to_string(),
            parsed.title,
            parsed.description.unwrap_or_default(),
        );
        self.store.add_task(task);

        // New tasks land at the end of the list; follow them.
        self.state.select(Some(self.task_count() - 1));
    }

    fn submit_edit(&mut self) {
        if let Some(mut task) = self.selected_task() {
            let parsed = parse_input(&self.input);
            if !parsed.title.is_empty() {
                task.title = parsed.title;
            }
            if let Some(description) = parsed.description {
                task.description = description;
            }
            self.store.update_task(task);
        }
    }
}
