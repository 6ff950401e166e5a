pub mod enums;
pub mod task;
pub mod views;

pub use enums::{EditField, Focus, UiMode};
pub use task::{RepeatDay, Task, TaskFields, TaskId};
pub use views::{active_label, completed_label, task_rows, Section, TaskRow};
