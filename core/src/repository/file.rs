use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::TaskCollection;
use crate::repository::traits::SnapshotRepository;

const SNAPSHOT_FILE_NAME: &str = "tasks.json";

#[derive(Clone)]
pub struct FileSnapshotRepository {
    file_path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                // Default data directory: ~/.taskpad
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".taskpad")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(SNAPSHOT_FILE_NAME);

        Ok(FileSnapshotRepository { file_path: path })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    fn try_load(&self) -> Result<TaskCollection> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let collection = serde_json::from_reader(reader)?;
        Ok(collection)
    }

    fn try_save(&self, collection: &TaskCollection) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, collection)?;
        writer.flush()?;
        Ok(())
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> TaskCollection {
        // No snapshot yet is the normal first-run state, not a diagnostic.
        if !self.file_path.exists() {
            return TaskCollection::new();
        }
        match self.try_load() {
            Ok(collection) => collection,
            Err(err) => {
                log::warn!(
                    "discarding unreadable snapshot at {}: {}",
                    self.file_path.display(),
                    err
                );
                TaskCollection::new()
            }
        }
    }

    fn save(&self, collection: &TaskCollection) {
        if let Err(err) = self.try_save(collection) {
            log::warn!(
                "failed to persist snapshot to {}: {}",
                self.file_path.display(),
                err
            );
        }
    }
}
