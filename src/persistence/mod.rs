pub mod files;
pub mod storage;

pub use files::{ensure_dayplan_dir, get_dayplan_dir, init_local_dayplan, tasks_file};
pub use storage::{JsonFileStorage, Storage, StorageError};

#[cfg(test)]
pub use storage::MemoryStorage;
