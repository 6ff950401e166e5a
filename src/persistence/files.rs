use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the single file holding the whole task store
pub const TASKS_FILE: &str = "tasks.json";

/// Get the dayplan directory - checks for a local .dayplan first, then falls
/// back to the global ~/.dayplan
pub fn get_dayplan_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_dayplan(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".dayplan"))
}

/// Find a local .dayplan directory by walking up the directory tree
fn find_local_dayplan(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let dayplan_dir = current.join(".dayplan");
        if dayplan_dir.is_dir() {
            return Some(dayplan_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the dayplan directory exists
pub fn ensure_dayplan_dir() -> Result<PathBuf> {
    let dir = get_dayplan_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .dayplan directory in the current directory
pub fn init_local_dayplan() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let dayplan_dir = current_dir.join(".dayplan");

    if dayplan_dir.exists() {
        anyhow::bail!("Dayplan directory already exists: {}", dayplan_dir.display());
    }

    fs::create_dir_all(&dayplan_dir)
        .with_context(|| format!("Failed to create directory: {}", dayplan_dir.display()))?;

    Ok(dayplan_dir)
}

/// Get the path to the task store file
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_dayplan_dir()?.join(TASKS_FILE))
}
