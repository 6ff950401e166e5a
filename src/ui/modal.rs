use crate::app::AppState;
use crate::domain::UiMode;
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

/// Render the day changed modal (forces restart)
pub fn render_day_changed_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::DayChanged {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw("  A new day has begun!"));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  The date has changed since you started the app."));
        lines.push(Line::raw("  Please close and restart Dayplan to continue."));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  Your tasks have been saved."));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::styled("  [q]", modal_title_style()),
            Span::raw(" Close Dayplan  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        " \u{1F305} Day Changed ",
                        modal_title_style(),
                    ))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
