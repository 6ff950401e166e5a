use std::collections::BTreeSet;

use chrono::{Local, NaiveDate, NaiveTime, Utc};

use crate::calendar::CalendarState;
use crate::domain::task::hhmm;
use crate::domain::{
    task_rows, EditField, Focus, RepeatDay, Task, TaskFields, TaskId, TaskRow, UiMode,
};
use crate::persistence::StorageError;
use crate::store::TaskStore;

/// Input buffer for the add-task form.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    /// Text typed so far
    pub text: String,
}

/// Draft buffers for editing one task.
///
/// Every field is kept as the raw string being typed; nothing is
/// validated until [`EditSession::parse`] runs on save.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Task being edited
    pub task_id: TaskId,
    /// Field the cursor is in
    pub field: EditField,
    /// Task text draft
    pub text: String,
    /// Date draft, `YYYY-MM-DD`
    pub date: String,
    /// Start time draft, `HH:MM` or empty
    pub start: String,
    /// End time draft, `HH:MM` or empty
    pub end: String,
    /// Weekdays the task repeats on
    pub repeat: BTreeSet<RepeatDay>,
}

impl EditSession {
    fn from_task(task: &Task) -> Self {
        Self {
            task_id: task.id,
            field: EditField::Text,
            text: task.text.clone(),
            date: task.date.format("%Y-%m-%d").to_string(),
            start: format_time(task.start_time),
            end: format_time(task.end_time),
            repeat: task.repeat.clone(),
        }
    }

    /// Validate the drafts into a field update.
    ///
    /// Returns `None` when the date or a non-empty time does not parse,
    /// leaving the session open for correction.
    pub fn parse(&self) -> Option<TaskFields> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let start_time = parse_time(&self.start)?;
        let end_time = parse_time(&self.end)?;
        Some(TaskFields {
            text: self.text.clone(),
            date,
            start_time,
            end_time,
            repeat: self.repeat.clone(),
        })
    }
}

fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format(hhmm::FORMAT).to_string(),
        None => String::new(),
    }
}

// An empty draft clears the time; anything else must parse as HH:MM.
fn parse_time(raw: &str) -> Option<Option<NaiveTime>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    NaiveTime::parse_from_str(raw, hhmm::FORMAT).ok().map(Some)
}

/// Application state shared between input handling and rendering.
pub struct AppState {
    /// Task collection and its storage backend
    pub store: TaskStore,
    /// Calendar pane state
    pub calendar: CalendarState,
    /// The day this session started on
    pub today: NaiveDate,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Which pane receives navigation keys
    pub focus: Focus,
    /// Cursor position in the flattened task rows
    pub selected_index: usize,
    /// Add form state, present while in AddingTask mode
    pub add_form: Option<AddForm>,
    /// Edit drafts, present while in EditingTask mode
    pub edit: Option<EditSession>,
}

impl AppState {
    pub fn new(store: TaskStore, today: NaiveDate) -> Self {
        Self {
            store,
            calendar: CalendarState::new(today),
            today,
            ui_mode: UiMode::Normal,
            focus: Focus::Tasks,
            selected_index: 0,
            add_form: None,
            edit: None,
        }
    }

    /// True once the wall clock has rolled past the session's start day.
    pub fn has_day_changed(&self) -> bool {
        Local::now().date_naive() != self.today
    }

    /// Drop any open input session and require a restart.
    pub fn notice_day_change(&mut self) {
        self.ui_mode = UiMode::DayChanged;
        self.add_form = None;
        self.edit = None;
    }

    /// Flattened task rows, active section first.
    pub fn rows(&self) -> Vec<TaskRow> {
        task_rows(self.store.tasks())
    }

    /// Task under the selection cursor, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        let rows = self.rows();
        if let Some(row) = rows.get(self.selected_index) {
            self.store.tasks().get(row.task_index)
        } else {
            None
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.rows().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    // Rows shift when tasks toggle sections or get removed.
    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Open the add form for the calendar's selected day.
    pub fn start_add(&mut self) {
        self.add_form = Some(AddForm::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn add_form_char(&mut self, c: char) {
        if let Some(form) = &mut self.add_form {
            form.text.push(c);
        }
    }

    pub fn add_form_backspace(&mut self) {
        if let Some(form) = &mut self.add_form {
            form.text.pop();
        }
    }

    /// Submit the add form. Blank text adds nothing.
    pub fn submit_add(&mut self) -> Result<(), StorageError> {
        if let Some(form) = self.add_form.take() {
            self.store
                .add(&form.text, self.calendar.selected, now_millis())?;
        }
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn cancel_add(&mut self) {
        self.add_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Open an edit session for the selected task.
    ///
    /// Completed and past-dated tasks cannot be edited. A draft already
    /// open for another task is replaced.
    pub fn start_edit(&mut self) {
        let session = if let Some(task) = self.selected_task() {
            if task.done || task.is_past(self.today) {
                return;
            }
            EditSession::from_task(task)
        } else {
            return;
        };
        self.edit = Some(session);
        self.ui_mode = UiMode::EditingTask;
    }

    pub fn edit_char(&mut self, c: char) {
        if let Some(edit) = &mut self.edit {
            match edit.field {
                EditField::Text => edit.text.push(c),
                EditField::Date => edit.date.push(c),
                EditField::Start => edit.start.push(c),
                EditField::End => edit.end.push(c),
                EditField::Repeat => {}
            }
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = &mut self.edit {
            match edit.field {
                EditField::Text => {
                    edit.text.pop();
                }
                EditField::Date => {
                    edit.date.pop();
                }
                EditField::Start => {
                    edit.start.pop();
                }
                EditField::End => {
                    edit.end.pop();
                }
                EditField::Repeat => {}
            }
        }
    }

    pub fn edit_next_field(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.field = edit.field.next();
        }
    }

    pub fn edit_prev_field(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.field = edit.field.prev();
        }
    }

    /// Add or remove a weekday from the draft's repeat set.
    pub fn edit_toggle_repeat(&mut self, day: RepeatDay) {
        if let Some(edit) = &mut self.edit {
            if !edit.repeat.remove(&day) {
                edit.repeat.insert(day);
            }
        }
    }

    /// Save the edit drafts onto the task.
    ///
    /// An unparseable date or time keeps the session open. The task's id
    /// and done flag are never touched.
    pub fn commit_edit(&mut self) -> Result<(), StorageError> {
        let (id, fields) = if let Some(edit) = &self.edit {
            match edit.parse() {
                Some(fields) => (edit.task_id, fields),
                None => return Ok(()),
            }
        } else {
            return Ok(());
        };
        self.store.update(id, fields)?;
        self.edit = None;
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Flip done on the selected task. Past-dated tasks stay locked.
    pub fn toggle_selected_done(&mut self) -> Result<(), StorageError> {
        let id = if let Some(task) = self.selected_task() {
            task.id
        } else {
            return Ok(());
        };
        self.store.toggle_done(id, self.today)?;
        self.clamp_selection();
        Ok(())
    }

    /// Remove the selected task. Past-dated tasks stay locked.
    pub fn delete_selected(&mut self) -> Result<(), StorageError> {
        let id = if let Some(task) = self.selected_task() {
            if task.is_past(self.today) {
                return Ok(());
            }
            task.id
        } else {
            return Ok(());
        };
        self.store.remove(id)?;
        self.clamp_selection();
        Ok(())
    }
}

/// Task ids come from the wall clock, in milliseconds since the epoch.
fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
