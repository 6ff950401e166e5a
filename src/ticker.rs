use std::time::Duration;

/// Event poll interval in milliseconds, also how often the day
/// rollover check runs
pub const DEFAULT_TICK_MS: u64 = 500;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(500));
    }
}
