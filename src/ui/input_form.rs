use crate::app::{AppState, EditSession};
use crate::domain::EditField;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the form for adding a task to the selected day
pub fn render_add_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.add_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            " Task for {}:",
            app.calendar.selected.format("%Y-%m-%d")
        )));
        lines.push(Line::from(vec![
            Span::raw(" > "),
            Span::styled(form.text.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::raw(" Enter to add  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the edit form with one line per field
pub fn render_edit_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(edit) = &app.edit {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        for field in EditField::ALL {
            let is_current = field == edit.field;
            let marker = if is_current { "> " } else { "  " };

            let mut spans = vec![
                Span::raw(format!(" {:<8}", format!("{}:", field.label()))),
                Span::raw(marker.to_string()),
                Span::styled(field_value(edit, field), modal_title_style()),
            ];
            if is_current && field != EditField::Repeat {
                spans.push(Span::styled("█", modal_title_style())); // Cursor
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::raw(""));
        lines.push(Line::raw(" Date YYYY-MM-DD  ·  times HH:MM (blank clears)"));
        lines.push(Line::raw(" Repeat: digits 1-7 toggle Sun..Sat"));
        lines.push(Line::raw(""));
        lines.push(Line::raw(
            " Tab to switch fields  ·  Enter to save  ·  Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Edit Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

fn field_value(edit: &EditSession, field: EditField) -> String {
    match field {
        EditField::Text => edit.text.clone(),
        EditField::Date => edit.date.clone(),
        EditField::Start => edit.start.clone(),
        EditField::End => edit.end.clone(),
        EditField::Repeat => edit
            .repeat
            .iter()
            .map(|day| day.short())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
