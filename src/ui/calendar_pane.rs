use crate::app::AppState;
use crate::calendar::is_selectable;
use crate::domain::Focus;
use crate::ui::styles::{
    border_style, default_style, dimmed_style, focused_border_style, hint_style, selected_style,
    title_style, today_style,
};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Render the month calendar pane
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    let header: Vec<Span> = WEEKDAY_HEADER
        .iter()
        .map(|name| Span::styled(format!("{:>3}", name), hint_style()))
        .collect();
    lines.push(Line::from(header));

    for week in app.calendar.grid() {
        let spans: Vec<Span> = week
            .iter()
            .map(|&day| day_span(day, app, app.today))
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Selected: {}", app.calendar.selected.format("%Y-%m-%d")),
        default_style(),
    )));

    let border = if app.focus == Focus::Calendar {
        focused_border_style()
    } else {
        border_style()
    };
    let title = format!(" {} ", app.calendar.month_title());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Style one day cell of the grid
fn day_span(day: NaiveDate, app: &AppState, today: NaiveDate) -> Span<'static> {
    let text = format!("{:>3}", day.day());

    let style = if day == app.calendar.selected {
        selected_style()
    } else if day == today {
        today_style()
    } else if !app.calendar.in_view_month(day) || !is_selectable(day, today) {
        dimmed_style()
    } else {
        default_style()
    };

    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::store::TaskStore;

    fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
    }

    fn create_test_app() -> AppState {
        let store = TaskStore::open(Box::new(MemoryStorage::new())).unwrap();
        AppState::new(store, test_today())
    }

    #[test]
    fn test_day_span_styles() {
        let app = create_test_app();
        let today = test_today();

        let selected = day_span(app.calendar.selected, &app, today);
        assert_eq!(selected.style, selected_style());

        let tomorrow = today + chrono::Duration::days(1);
        assert_eq!(day_span(tomorrow, &app, today).style, default_style());

        let yesterday = today - chrono::Duration::days(1);
        assert_eq!(day_span(yesterday, &app, today).style, dimmed_style());
    }

    #[test]
    fn test_day_span_marks_today_when_not_selected() {
        let mut app = create_test_app();
        let today = test_today();
        app.calendar.move_selection(1, today);

        assert_eq!(day_span(today, &app, today).style, today_style());
    }
}
