//! Wall clock shown in the footer, refreshed from the tick stream.

use chrono::{DateTime, Local};

/// 24-hour display of the current wall time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clock {
    display: String,
}

impl Clock {
    pub fn new() -> Self {
        let mut clock = Self::default();
        clock.update(Local::now());
        clock
    }

    /// Refresh from a timestamp; called at least once per second.
    pub fn update(&mut self, now: DateTime<Local>) {
        self.display = now.format("%H:%M:%S").to_string();
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_is_24h_with_seconds() {
        let mut clock = Clock::default();
        let now = Local.with_ymd_and_hms(2024, 5, 1, 13, 5, 9).single().unwrap();
        clock.update(now);
        assert_eq!(clock.display(), "13:05:09");
    }

    #[test]
    fn test_new_starts_populated() {
        let clock = Clock::new();
        assert_eq!(clock.display().len(), 8);
    }
}
