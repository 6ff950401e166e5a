use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Rows in the month grid (fixed so the pane never changes height)
pub const GRID_WEEKS: usize = 6;

/// State of the calendar pane: the visible month and the selected day.
///
/// The selected day feeds new-task creation. It can never fall before
/// today; the visible month, by contrast, pages freely in both directions.
pub struct CalendarState {
    /// Currently selected day (never before today)
    pub selected: NaiveDate,
    /// First day of the month the grid shows
    pub view_month: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            view_month: first_day_of_month(today.year(), today.month()),
        }
    }

    /// Select a day. Past days are not selectable; selecting one leaves
    /// the state unchanged. The view snaps to the selected day's month.
    pub fn select(&mut self, date: NaiveDate, today: NaiveDate) {
        if date < today {
            return;
        }
        self.selected = date;
        self.view_month = first_day_of_month(date.year(), date.month());
    }

    /// Move the selection by a number of days, clamping at today
    pub fn move_selection(&mut self, days: i64, today: NaiveDate) {
        let candidate = add_days(self.selected, days).max(today);
        self.select(candidate, today);
    }

    /// Page the visible month without touching the selection
    pub fn page_month(&mut self, months: i32) {
        self.view_month = shift_months(self.view_month, months);
    }

    /// Snap selection and view back to today
    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.selected = today;
        self.view_month = first_day_of_month(today.year(), today.month());
    }

    /// Header line for the calendar pane, e.g. "March 2026"
    pub fn month_title(&self) -> String {
        self.view_month.format("%B %Y").to_string()
    }

    /// The visible month as a fixed 6x7 grid of days, weeks starting on
    /// Sunday. Leading and trailing cells belong to neighboring months.
    pub fn grid(&self) -> Vec<[NaiveDate; 7]> {
        let mut day = start_of_week(self.view_month, Weekday::Sun);
        let mut weeks = Vec::with_capacity(GRID_WEEKS);

        for _ in 0..GRID_WEEKS {
            let mut week = [day; 7];
            for slot in week.iter_mut() {
                *slot = day;
                day = add_days(day, 1);
            }
            weeks.push(week);
        }

        weeks
    }

    /// Whether a grid cell belongs to the visible month
    pub fn in_view_month(&self, date: NaiveDate) -> bool {
        date.year() == self.view_month.year() && date.month() == self.view_month.month()
    }
}

/// Whether a day can be picked (past days are disabled)
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month >= 12 {
        (year.saturating_add(1), 1_u32)
    } else {
        (year, month + 1)
    };
    add_days(first_day_of_month(next_year, next_month), -1)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).day()
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;

    while month < 1 {
        month += 12;
        year = year.saturating_sub(1);
    }
    while month > 12 {
        month -= 12;
        year = year.saturating_add(1);
    }

    let month = month as u32;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let day_idx = day.weekday().num_days_from_monday() as i64;
    let start_idx = week_start.num_days_from_monday() as i64;
    let diff = (7 + day_idx - start_idx) % 7;
    add_days(day, -diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_selects_today() {
        let today = date(2026, 3, 15);
        let cal = CalendarState::new(today);
        assert_eq!(cal.selected, today);
        assert_eq!(cal.view_month, date(2026, 3, 1));
    }

    #[test]
    fn test_select_past_day_is_refused() {
        let today = date(2026, 3, 15);
        let mut cal = CalendarState::new(today);
        cal.select(date(2026, 3, 14), today);
        assert_eq!(cal.selected, today);
    }

    #[test]
    fn test_select_future_day_moves_view() {
        let today = date(2026, 3, 15);
        let mut cal = CalendarState::new(today);
        cal.select(date(2026, 5, 2), today);
        assert_eq!(cal.selected, date(2026, 5, 2));
        assert_eq!(cal.view_month, date(2026, 5, 1));
    }

    #[test]
    fn test_move_selection_clamps_at_today() {
        let today = date(2026, 3, 15);
        let mut cal = CalendarState::new(today);
        cal.move_selection(-1, today);
        assert_eq!(cal.selected, today);

        cal.move_selection(1, today);
        cal.move_selection(-7, today);
        assert_eq!(cal.selected, today);
    }

    #[test]
    fn test_move_selection_across_month_boundary() {
        let today = date(2026, 3, 15);
        let mut cal = CalendarState::new(today);
        cal.select(date(2026, 3, 30), today);
        cal.move_selection(7, today);
        assert_eq!(cal.selected, date(2026, 4, 6));
        assert_eq!(cal.view_month, date(2026, 4, 1));
    }

    #[test]
    fn test_page_month_keeps_selection() {
        let today = date(2026, 3, 15);
        let mut cal = CalendarState::new(today);
        cal.page_month(1);
        assert_eq!(cal.view_month, date(2026, 4, 1));
        assert_eq!(cal.selected, today);

        // Paging backwards may show months before today
        cal.page_month(-3);
        assert_eq!(cal.view_month, date(2026, 1, 1));
        assert_eq!(cal.selected, today);
    }

    #[test]
    fn test_jump_to_today_after_paging() {
        let today = date(2026, 3, 15);
        let mut cal = CalendarState::new(today);
        cal.page_month(5);
        cal.jump_to_today(today);
        assert_eq!(cal.selected, today);
        assert_eq!(cal.view_month, date(2026, 3, 1));
    }

    #[test]
    fn test_grid_shape_and_padding() {
        let today = date(2026, 4, 10);
        let cal = CalendarState::new(today);
        let grid = cal.grid();

        assert_eq!(grid.len(), GRID_WEEKS);
        // April 2026 starts on a Wednesday; the first row pads back to the
        // previous Sunday
        assert_eq!(grid[0][0], date(2026, 3, 29));
        assert_eq!(grid[0][3], date(2026, 4, 1));
        assert_eq!(grid[5][6], date(2026, 5, 9));

        assert!(!cal.in_view_month(date(2026, 3, 29)));
        assert!(cal.in_view_month(date(2026, 4, 1)));
        assert!(!cal.in_view_month(date(2026, 5, 9)));
    }

    #[test]
    fn test_grid_every_week_starts_on_sunday() {
        let cal = CalendarState::new(date(2026, 7, 4));
        for week in cal.grid() {
            assert_eq!(week[0].weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_shift_months_clamps_day() {
        assert_eq!(shift_months(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(shift_months(date(2026, 3, 31), -1), date(2026, 2, 28));
        assert_eq!(shift_months(date(2026, 12, 15), 1), date(2027, 1, 15));
        assert_eq!(shift_months(date(2026, 1, 15), -1), date(2025, 12, 15));
    }

    #[test]
    fn test_is_selectable() {
        let today = date(2026, 3, 15);
        assert!(!is_selectable(date(2026, 3, 14), today));
        assert!(is_selectable(today, today));
        assert!(is_selectable(date(2026, 3, 16), today));
    }
}
