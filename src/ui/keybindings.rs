use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" Tab focus   "),
        Span::raw("↑/↓/←/→ move   "),
        Span::raw("[ ] month   "),
        Span::raw("t today   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("d/space done   "),
        Span::raw("x delete   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
