use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Task identifier: creation time in milliseconds since the Unix epoch.
///
/// Ids are handed out by the store, which bumps past the highest existing
/// id when two tasks would otherwise collide within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    /// The raw millisecond value
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

/// Weekday flag for the weekly-repeat marker on a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RepeatDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl RepeatDay {
    /// All weekdays in display order (week starts on Sunday)
    pub const ALL: [RepeatDay; 7] = [
        RepeatDay::Sunday,
        RepeatDay::Monday,
        RepeatDay::Tuesday,
        RepeatDay::Wednesday,
        RepeatDay::Thursday,
        RepeatDay::Friday,
        RepeatDay::Saturday,
    ];

    /// Full weekday name as persisted (e.g. "Sunday")
    pub fn name(self) -> &'static str {
        match self {
            RepeatDay::Sunday => "Sunday",
            RepeatDay::Monday => "Monday",
            RepeatDay::Tuesday => "Tuesday",
            RepeatDay::Wednesday => "Wednesday",
            RepeatDay::Thursday => "Thursday",
            RepeatDay::Friday => "Friday",
            RepeatDay::Saturday => "Saturday",
        }
    }

    /// Three-letter label shown in list rows and the edit form (e.g. "Sun")
    pub fn short(self) -> &'static str {
        &self.name()[..3]
    }
}

/// A single dated to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique id, also the creation timestamp
    pub id: TaskId,
    /// Task description
    pub text: String,
    /// Day the task belongs to
    pub date: NaiveDate,
    /// Whether the task is completed
    pub done: bool,
    /// Optional start of the planned time window
    #[serde(default, with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    /// Optional end of the planned time window
    #[serde(default, with = "hhmm")]
    pub end_time: Option<NaiveTime>,
    /// Weekdays this task is marked to repeat on (informational only)
    #[serde(default)]
    pub repeat: BTreeSet<RepeatDay>,
}

impl Task {
    /// Create a task with the defaults every new submission gets
    pub fn new(id: TaskId, text: String, date: NaiveDate) -> Self {
        Self {
            id,
            text,
            date,
            done: false,
            start_time: None,
            end_time: None,
            repeat: BTreeSet::new(),
        }
    }

    /// Whether this task's day is strictly before the given day
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Overwrite the editable fields from a committed draft.
    /// Id and done status are never touched by an edit.
    pub fn apply(&mut self, fields: TaskFields) {
        self.text = fields.text;
        self.date = fields.date;
        self.start_time = fields.start_time;
        self.end_time = fields.end_time;
        self.repeat = fields.repeat;
    }
}

/// The editable fields of a task, produced by parsing an edit draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub text: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub repeat: BTreeSet<RepeatDay>,
}

/// Serde adapter mapping optional times of day to "HH:MM" strings,
/// with the empty string standing in for an unset time.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(value) => serializer.serialize_str(&value.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskId(1700000000000), "Water plants".to_string(), sample_date());
        assert!(!task.done);
        assert!(task.start_time.is_none());
        assert!(task.end_time.is_none());
        assert!(task.repeat.is_empty());
    }

    #[test]
    fn test_is_past() {
        let task = Task::new(TaskId(1), "x".to_string(), sample_date());
        let day_after = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
        let day_before = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert!(task.is_past(day_after));
        assert!(!task.is_past(sample_date()));
        assert!(!task.is_past(day_before));
    }

    #[test]
    fn test_apply_never_touches_id_or_done() {
        let mut task = Task::new(TaskId(42), "Old text".to_string(), sample_date());
        task.done = true;

        let mut repeat = BTreeSet::new();
        repeat.insert(RepeatDay::Monday);
        task.apply(TaskFields {
            text: "New text".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 30, 0),
            end_time: NaiveTime::from_hms_opt(10, 0, 0),
            repeat,
        });

        assert_eq!(task.id, TaskId(42));
        assert!(task.done);
        assert_eq!(task.text, "New text");
        assert_eq!(task.date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(task.start_time, NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn test_serialized_shape() {
        let mut task = Task::new(TaskId(1711234567890), "Team sync".to_string(), sample_date());
        task.start_time = NaiveTime::from_hms_opt(9, 30, 0);
        task.end_time = NaiveTime::from_hms_opt(10, 15, 0);
        task.repeat.insert(RepeatDay::Wednesday);
        task.repeat.insert(RepeatDay::Monday);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1711234567890i64,
                "text": "Team sync",
                "date": "2026-03-15",
                "done": false,
                "startTime": "09:30",
                "endTime": "10:15",
                "repeat": ["Monday", "Wednesday"],
            })
        );
    }

    #[test]
    fn test_deserialize_empty_time_strings() {
        let value = json!({
            "id": 5,
            "text": "Stretch",
            "date": "2026-03-15",
            "done": false,
            "startTime": "",
            "endTime": "",
            "repeat": [],
        });
        let task: Task = serde_json::from_value(value).unwrap();
        assert!(task.start_time.is_none());
        assert!(task.end_time.is_none());
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_keys() {
        let value = json!({
            "id": 7,
            "text": "Old record",
            "date": "2025-12-01",
            "done": true,
        });
        let task: Task = serde_json::from_value(value).unwrap();
        assert!(task.start_time.is_none());
        assert!(task.end_time.is_none());
        assert!(task.repeat.is_empty());
    }

    #[test]
    fn test_repeat_days_keep_week_order() {
        let mut repeat = BTreeSet::new();
        repeat.insert(RepeatDay::Saturday);
        repeat.insert(RepeatDay::Sunday);
        repeat.insert(RepeatDay::Wednesday);
        let shorts: Vec<&str> = repeat.iter().map(|day| day.short()).collect();
        assert_eq!(shorts, vec!["Sun", "Wed", "Sat"]);
    }
}
