use crate::domain::Task;
use crate::persistence::files;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Error type for task store I/O
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode task store: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Backend holding the persisted task store.
///
/// The whole store travels as one JSON array; every mutation rewrites it.
pub trait Storage {
    /// Load all tasks. A missing store or one that fails to decode yields
    /// an empty list; only real read failures surface as errors.
    fn load(&self) -> Result<Vec<Task>, StorageError>;

    /// Replace the persisted store with the given tasks
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// File-backed storage writing pretty-printed JSON atomically
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the store at its default location under the dayplan directory
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(files::tasks_file()?))
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        // A store that fails to decode starts the app empty rather than
        // refusing to run
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(tasks)?;
        atomic_write(&self.path, &json).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Atomically write content to a file using temp file + rename
fn atomic_write(path: &Path, content: &str) -> Result<(), std::io::Error> {
    // Temp file must live in the same directory for the rename to be atomic
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// In-memory storage backing the unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tasks: Vec<Task>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use chrono::NaiveDate;

    fn create_test_task(id: i64, text: &str) -> Task {
        Task::new(
            TaskId(id),
            text.to_string(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("tasks.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(temp_dir.path().join("tasks.json"));

        let tasks = vec![create_test_task(1, "one"), create_test_task(2, "two")];
        storage.save(&tasks).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(temp_dir.path().join("tasks.json"));

        storage.save(&[create_test_task(1, "one")]).unwrap();
        storage.save(&[create_test_task(2, "two")]).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "two");
    }

    #[test]
    fn test_saved_file_is_valid_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let mut storage = JsonFileStorage::new(path.clone());

        storage.save(&[create_test_task(1, "one")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["text"], "one");
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());

        let tasks = vec![create_test_task(1, "one")];
        storage.save(&tasks).unwrap();
        assert_eq!(storage.load().unwrap(), tasks);
    }
}
