use super::task::Task;

/// Which list section a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Active,
    Completed,
}

/// A selectable row in the two-section task list
#[derive(Debug, Clone)]
pub struct TaskRow {
    /// Position in the flattened selection order
    pub index: usize,
    /// Section the row renders under
    pub section: Section,
    /// Index into the store's task vector
    pub task_index: usize,
}

/// Flatten the store into selectable rows: active tasks first, then
/// completed tasks, each section in insertion order.
pub fn task_rows(tasks: &[Task]) -> Vec<TaskRow> {
    let mut rows = Vec::new();
    let mut index = 0;

    for section in [Section::Active, Section::Completed] {
        for (task_index, task) in tasks.iter().enumerate() {
            let belongs = match section {
                Section::Active => !task.done,
                Section::Completed => task.done,
            };
            if belongs {
                rows.push(TaskRow {
                    index,
                    section,
                    task_index,
                });
                index += 1;
            }
        }
    }

    rows
}

/// Row label for the active list: text, bracketed date with the optional
/// time window, and the repeat marker.
pub fn active_label(task: &Task) -> String {
    let mut label = format!("{} [{}", task.text, task.date.format("%Y-%m-%d"));
    if let Some(start) = task.start_time {
        label.push_str(&format!(" {}", start.format("%H:%M")));
    }
    if let Some(end) = task.end_time {
        label.push_str(&format!("-{}", end.format("%H:%M")));
    }
    label.push(']');
    label.push_str(&repeat_suffix(task));
    label
}

/// Row label for the completed list: text with a parenthesized time window.
/// Completed rows drop the date.
pub fn completed_label(task: &Task) -> String {
    let mut label = task.text.clone();
    if task.start_time.is_some() || task.end_time.is_some() {
        label.push(' ');
    }
    if let Some(start) = task.start_time {
        label.push_str(&format!("({}", start.format("%H:%M")));
    }
    if let Some(end) = task.end_time {
        label.push_str(&format!("-{})", end.format("%H:%M")));
    }
    label.push_str(&repeat_suffix(task));
    label
}

fn repeat_suffix(task: &Task) -> String {
    if task.repeat.is_empty() {
        return String::new();
    }
    let days: Vec<&str> = task.repeat.iter().map(|day| day.short()).collect();
    format!(" [Repeats: {}]", days.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{RepeatDay, TaskId};
    use chrono::{NaiveDate, NaiveTime};

    fn create_test_task(id: i64, text: &str, done: bool) -> Task {
        let mut task = Task::new(
            TaskId(id),
            text.to_string(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        );
        task.done = done;
        task
    }

    #[test]
    fn test_task_rows_active_before_completed() {
        let tasks = vec![
            create_test_task(1, "a", false),
            create_test_task(2, "b", true),
            create_test_task(3, "c", false),
            create_test_task(4, "d", true),
        ];

        let rows = task_rows(&tasks);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].task_index, 0);
        assert_eq!(rows[0].section, Section::Active);
        assert_eq!(rows[1].task_index, 2);
        assert_eq!(rows[1].section, Section::Active);
        assert_eq!(rows[2].task_index, 1);
        assert_eq!(rows[2].section, Section::Completed);
        assert_eq!(rows[3].task_index, 3);
        assert_eq!(rows[3].section, Section::Completed);
        assert!(rows.iter().enumerate().all(|(i, row)| row.index == i));
    }

    #[test]
    fn test_task_rows_empty_store() {
        assert!(task_rows(&[]).is_empty());
    }

    #[test]
    fn test_active_label_with_window_and_repeat() {
        let mut task = create_test_task(1, "Team sync", false);
        task.start_time = NaiveTime::from_hms_opt(9, 30, 0);
        task.end_time = NaiveTime::from_hms_opt(10, 15, 0);
        task.repeat.insert(RepeatDay::Monday);
        task.repeat.insert(RepeatDay::Wednesday);

        assert_eq!(
            active_label(&task),
            "Team sync [2026-03-15 09:30-10:15] [Repeats: Mon, Wed]"
        );
    }

    #[test]
    fn test_active_label_without_times() {
        let task = create_test_task(1, "Water plants", false);
        assert_eq!(active_label(&task), "Water plants [2026-03-15]");
    }

    #[test]
    fn test_active_label_end_time_only() {
        // An end without a start attaches directly to the date
        let mut task = create_test_task(1, "Pick up parcel", false);
        task.end_time = NaiveTime::from_hms_opt(17, 0, 0);
        assert_eq!(active_label(&task), "Pick up parcel [2026-03-15-17:00]");
    }

    #[test]
    fn test_completed_label_with_window() {
        let mut task = create_test_task(1, "Morning run", true);
        task.start_time = NaiveTime::from_hms_opt(7, 0, 0);
        task.end_time = NaiveTime::from_hms_opt(7, 45, 0);
        assert_eq!(completed_label(&task), "Morning run (07:00-07:45)");
    }

    #[test]
    fn test_completed_label_plain() {
        let task = create_test_task(1, "Read a chapter", true);
        assert_eq!(completed_label(&task), "Read a chapter");
    }

    #[test]
    fn test_completed_label_end_time_only() {
        let mut task = create_test_task(1, "Tidy desk", true);
        task.end_time = NaiveTime::from_hms_opt(17, 45, 0);
        assert_eq!(completed_label(&task), "Tidy desk -17:45)");
    }
}
