mod tui;

use anyhow::Result;
use clap::Parser;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use taskpad_core::{parse_input, FileSnapshotRepository, Task, TaskCollection, TaskStore};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A local task tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a new task (usage: add Buy milk :: 2% organic)
    Add {
        /// Task title, optionally followed by ":: description"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List all tasks
    List,
    /// Edit a task (usage: edit <id> New title :: new description)
    Edit {
        /// Task id, or a unique prefix of one
        id: String,
        /// Replacement title, optionally followed by ":: description"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Toggle completion on a task
    Toggle {
        /// Task id, or a unique prefix of one
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task id, or a unique prefix of one
        id: String,
    },
    /// Open the Terminal User Interface
    Tui,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "St")]
    status: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn open_store() -> Result<TaskStore<FileSnapshotRepository>> {
    let repository = FileSnapshotRepository::new(None)?;
    Ok(TaskStore::new(repository))
}

// The store only understands full ids; translating a user-typed reference
// (exact id or unique prefix) happens here, on the frontend's side of the
// contract.
fn resolve_id(collection: &TaskCollection, reference: &str) -> Option<String> {
    if collection.tasks.iter().any(|task| task.id == reference) {
        return Some(reference.to_string());
    }
    let mut matches: Vec<&str> = collection
        .tasks
        .iter()
        .map(|task| task.id.as_str())
        .filter(|id| id.starts_with(reference))
        .collect();
    matches.sort();
    matches.dedup();
    match matches.len() {
        1 => Some(matches[0].to_string()),
        _ => None,
    }
}

fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add { args }) => {
            let parsed = parse_input(&args.join(" "));
            if parsed.title.is_empty() {
                println!("Error: Task title is required.");
                return Ok(());
            }

            let mut store = open_store()?;
            let task = Task::new(
                Uuid::new_v4().to_string(),
                parsed.title,
                parsed.description.unwrap_or_default(),
            );
            let title = task.title.clone();
            let id = task.id.clone();
            store.add_task(task);
            println!("Task added: {} (ID: {})", title, id);
        }
        Some(Commands::List) => {
            let store = open_store()?;
            let snapshot = store.snapshot();
            if snapshot.is_empty() {
                println!("No tasks yet. Add some tasks to get started!");
            } else {
                let rows: Vec<TaskRow> = snapshot
                    .tasks
                    .iter()
                    .map(|task| {
                        let status = if task.completed { "✔" } else { "☐" };
                        TaskRow {
                            id: short_id(&task.id).to_string(),
                            status: status.to_string(),
                            title: task.title.clone(),
                            description: task.description.clone(),
                        }
                    })
                    .collect();

                let mut table = Table::new(rows);
                table
                    .with(Style::modern())
                    .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
                println!("{}", table);
            }
        }
        Some(Commands::Edit { id, args }) => {
            let mut store = open_store()?;
            let target = resolve_id(store.snapshot(), &id).and_then(|task_id| {
                store
                    .snapshot()
                    .tasks
                    .iter()
                    .find(|task| task.id == task_id)
                    .cloned()
            });
            match target {
                Some(mut task) => {
                    let parsed = parse_input(&args.join(" "));
                    if !parsed.title.is_empty() {
                        task.title = parsed.title;
                    }
                    if let Some(description) = parsed.description {
                        task.description = description;
                    }
                    store.update_task(task);
                    println!("Task updated successfully");
                }
                None => println!("Error: no task matches '{}'.", id),
            }
        }
        Some(Commands::Toggle { id }) => {
            let mut store = open_store()?;
            match resolve_id(store.snapshot(), &id) {
                Some(task_id) => {
                    let was_completed = store
                        .snapshot()
                        .tasks
                        .iter()
                        .find(|task| task.id == task_id)
                        .map(|task| task.completed)
                        .unwrap_or(false);
                    store.toggle_task_complete(&task_id);
                    println!(
                        "Task marked as {}",
                        if was_completed { "incomplete" } else { "complete" }
                    );
                }
                None => println!("Error: no task matches '{}'.", id),
            }
        }
        Some(Commands::Delete { id }) => {
            let mut store = open_store()?;
            match resolve_id(store.snapshot(), &id) {
                Some(task_id) => {
                    store.delete_task(&task_id);
                    println!("Task deleted successfully");
                }
                None => println!("Error: no task matches '{}'.", id),
            }
        }
        Some(Commands::Tui) | None => {
            tui::run()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(ids: &[&str]) -> TaskCollection {
        TaskCollection {
            tasks: ids
                .iter()
                .map(|id| Task::new(id.to_string(), "t".to_string(), String::new()))
                .collect(),
        }
    }

    #[test]
    fn test_resolve_exact_id() {
        let c = collection(&["abc123", "abd456"]);
        assert_eq!(resolve_id(&c, "abc123"), Some("abc123".to_string()));
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let c = collection(&["abc123", "xyz789"]);
        assert_eq!(resolve_id(&c, "abc"), Some("abc123".to_string()));
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let c = collection(&["abc123", "abd456"]);
        assert_eq!(resolve_id(&c, "ab"), None);
    }

    #[test]
    fn test_resolve_unknown_reference() {
        let c = collection(&["abc123"]);
        assert_eq!(resolve_id(&c, "zzz"), None);
    }

    #[test]
    fn test_resolve_duplicate_ids_still_resolve() {
        // Two tasks sharing an id resolve to that id; the store decides
        // what a mutation does with the duplicates.
        let c = collection(&["abc123", "abc123"]);
        assert_eq!(resolve_id(&c, "abc"), Some("abc123".to_string()));
    }
}
