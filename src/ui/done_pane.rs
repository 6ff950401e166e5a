use crate::app::AppState;
use crate::domain::{completed_label, Focus, Section, Task};
use crate::ui::styles::{
    border_style, dimmed_style, done_style, done_text_style, focused_border_style, selected_style,
    title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the completed tasks pane
pub fn render_done_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.rows();
    let tasks = app.store.tasks();

    let done_rows: Vec<_> = rows
        .iter()
        .filter(|row| row.section == Section::Completed)
        .collect();

    let items: Vec<ListItem> = if done_rows.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  No completed tasks yet",
            dimmed_style(),
        )))]
    } else {
        done_rows
            .iter()
            .map(|row| {
                let task = &tasks[row.task_index];
                let line = create_done_line(task, app.today);
                if row.index == app.selected_index {
                    ListItem::new(line).style(selected_style())
                } else {
                    ListItem::new(line)
                }
            })
            .collect()
    };

    let border = if app.focus == Focus::Tasks {
        focused_border_style()
    } else {
        border_style()
    };
    let title = format!(" Completed Tasks ({}) ", done_rows.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a line for a completed task
fn create_done_line(task: &Task, today: NaiveDate) -> Line<'static> {
    let check_style = if task.is_past(today) {
        dimmed_style()
    } else {
        done_style()
    };

    Line::from(vec![
        Span::styled("✓ ".to_string(), check_style),
        Span::styled(completed_label(task), done_text_style()),
    ])
}
