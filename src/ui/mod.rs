pub mod calendar_pane;
pub mod done_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use calendar_pane::render_calendar_pane;
use done_pane::render_done_pane;
use input_form::{render_add_form, render_edit_form};
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_day_changed_modal;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_calendar_pane(f, app, layout.calendar_area);
    render_list_pane(f, app, layout.list_area);
    render_done_pane(f, app, layout.done_area);

    // Render day changed modal (takes precedence)
    if app.ui_mode == UiMode::DayChanged {
        render_day_changed_modal(f, app, size);
        return; // Don't render other overlays
    }

    // Render input forms if active
    if app.add_form.is_some() {
        render_add_form(f, app, size);
    }
    if app.edit.is_some() {
        render_edit_form(f, app, size);
    }
}
