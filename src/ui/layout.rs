use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub calendar_area: Rect,
    pub list_area: Rect,
    pub done_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Calendar column (fixed width) | task column
/// - Task column: active list above the completed list
pub fn create_layout(area: Rect) -> MainLayout {
    // Split into top bar and main content
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];

    // Split content horizontally: calendar on the left, tasks on the right
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Calendar pane
            Constraint::Min(0),     // Task panes
        ])
        .split(content_area);

    let calendar_area = horizontal_split[0];

    // Split the task column: active tasks above completed tasks
    let task_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Active tasks
            Constraint::Percentage(40), // Completed tasks
        ])
        .split(horizontal_split[1]);

    MainLayout {
        keybindings_area,
        calendar_area,
        list_area: task_split[0],
        done_area: task_split[1],
    }
}

/// Create centered modal area (for the forms and the day-changed notice)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
