use crate::app::AppState;
use crate::domain::{active_label, Focus, Section, Task};
use crate::ui::styles::{
    border_style, default_style, dimmed_style, focused_border_style, selected_style, title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the active tasks pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.rows();
    let tasks = app.store.tasks();

    let active_rows: Vec<_> = rows
        .iter()
        .filter(|row| row.section == Section::Active)
        .collect();

    let items: Vec<ListItem> = if active_rows.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  No active tasks 🎉",
            dimmed_style(),
        )))]
    } else {
        active_rows
            .iter()
            .map(|row| {
                let task = &tasks[row.task_index];
                let line = create_active_line(task, app.today);
                let style = if row.index == app.selected_index {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let border = if app.focus == Focus::Tasks {
        focused_border_style()
    } else {
        border_style()
    };
    let title = format!(" Active Tasks ({}) ", active_rows.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for an active task
fn create_active_line(task: &Task, today: NaiveDate) -> Line<'static> {
    let mut spans = Vec::new();
    let locked = task.is_past(today);
    let text_style = if locked { dimmed_style() } else { default_style() };

    spans.push(Span::styled("[ ] ".to_string(), text_style));
    spans.push(Span::styled(active_label(task), text_style));
    if locked {
        spans.push(Span::styled("  (locked)".to_string(), dimmed_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TaskId};

    fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
    }

    #[test]
    fn test_create_active_line() {
        let task = Task::new(TaskId(1), "Test task".to_string(), test_today());
        let line = create_active_line(&task, test_today());

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Test task"));
        assert!(line_str.contains("2026-04-10"));
        assert!(!line_str.contains("locked"));
    }

    #[test]
    fn test_create_active_line_marks_past_tasks() {
        let yesterday = test_today() - chrono::Duration::days(1);
        let task = Task::new(TaskId(1), "Old task".to_string(), yesterday);
        let line = create_active_line(&task, test_today());

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("locked"));
    }
}
