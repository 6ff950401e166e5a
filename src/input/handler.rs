use crate::app::AppState;
use crate::domain::{EditField, Focus, RepeatDay, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_add_mode(app, key),
        UiMode::EditingTask => handle_edit_mode(app, key),
        UiMode::DayChanged => handle_day_changed_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Switch focus between the calendar and the task list
        KeyCode::Tab => {
            app.focus = app.focus.toggled();
            Ok(false)
        }

        // Navigation, routed to the focused pane
        KeyCode::Up => {
            match app.focus {
                Focus::Calendar => app.calendar.move_selection(-7, app.today),
                Focus::Tasks => app.move_selection_up(),
            }
            Ok(false)
        }
        KeyCode::Down => {
            match app.focus {
                Focus::Calendar => app.calendar.move_selection(7, app.today),
                Focus::Tasks => app.move_selection_down(),
            }
            Ok(false)
        }
        KeyCode::Left => {
            if app.focus == Focus::Calendar {
                app.calendar.move_selection(-1, app.today);
            }
            Ok(false)
        }
        KeyCode::Right => {
            if app.focus == Focus::Calendar {
                app.calendar.move_selection(1, app.today);
            }
            Ok(false)
        }

        // Page the calendar month using [ and ]
        KeyCode::Char('[') => {
            app.calendar.page_month(-1);
            Ok(false)
        }
        KeyCode::Char(']') => {
            app.calendar.page_month(1);
            Ok(false)
        }

        // Jump back to today
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.calendar.jump_to_today(app.today);
            Ok(false)
        }

        // Add a task for the selected day
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add();
            Ok(false)
        }

        // Edit the selected task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit();
            Ok(false)
        }

        // Toggle done on the selected task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char(' ') => {
            app.toggle_selected_done()?;
            Ok(false)
        }

        // Delete the selected task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected()?;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add form is open
fn handle_add_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_add()?;
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_add();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.add_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.add_form_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while an edit session is open
fn handle_edit_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Save; invalid drafts keep the form open
        KeyCode::Enter => {
            app.commit_edit()?;
            Ok(false)
        }

        // Discard the drafts
        KeyCode::Esc => {
            app.cancel_edit();
            Ok(false)
        }

        // Cycle between fields
        KeyCode::Tab => {
            app.edit_next_field();
            Ok(false)
        }
        KeyCode::BackTab => {
            app.edit_prev_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.edit_backspace();
            Ok(false)
        }

        // On the repeat field digits 1-7 toggle weekdays; everywhere
        // else characters go into the field buffer
        KeyCode::Char(c) => {
            let on_repeat = app
                .edit
                .as_ref()
                .map(|edit| edit.field == EditField::Repeat)
                .unwrap_or(false);
            if on_repeat {
                if let Some(day) = repeat_day_for_digit(c) {
                    app.edit_toggle_repeat(day);
                }
            } else {
                app.edit_char(c);
            }
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys once the date has rolled over; only quitting is left
fn handle_day_changed_mode(_app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),
        _ => Ok(false),
    }
}

// Digits 1-7 map to Sunday through Saturday, the calendar's column order.
fn repeat_day_for_digit(c: char) -> Option<RepeatDay> {
    let idx = c.to_digit(10)? as usize;
    if (1..=7).contains(&idx) {
        Some(RepeatDay::ALL[idx - 1])
    } else {
        None
    }
}
