// src/app/clock.rs

use chrono::NaiveDateTime;

// Fixed formats: chrono is built without locale data, so `%X` is always
// 24-hour `HH:MM:SS` and names are English.
const TIME_FORMAT: &str = "%X";
const DATE_FORMAT: &str = "%A, %b %-d, %Y";

/// Wall-clock readout. The event loop re-renders it once per clock interval
/// for as long as the program runs.
#[derive(Debug, Default)]
pub struct ClockTicker {
    time: String,
    date: String,
}

impl ClockTicker {
    /// Renders immediately so the readout is never blank.
    pub fn start(now: NaiveDateTime) -> Self {
        let mut clock = Self::default();
        clock.tick(now);
        clock
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.time = now.format(TIME_FORMAT).to_string();
        self.date = now.format(DATE_FORMAT).to_string();
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn start_renders_straight_away() {
        let clock = ClockTicker::start(at(14, 5, 9));
        assert_eq!(clock.time(), "14:05:09");
        assert_eq!(clock.date(), "Sunday, Oct 18, 2026");
    }

    #[test]
    fn readout_uses_fixed_24_hour_and_english_formats() {
        let clock = ClockTicker::start(at(21, 7, 0));
        assert_eq!(clock.time(), "21:07:00");

        let clock = ClockTicker::start(
            NaiveDate::from_ymd_opt(2027, 3, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        );
        assert_eq!(clock.time(), "08:00:00");
        assert_eq!(clock.date(), "Friday, Mar 5, 2027");
    }

    #[test]
    fn tick_replaces_the_readout() {
        let mut clock = ClockTicker::start(at(23, 59, 59));
        clock.tick(at(0, 0, 1));
        assert_eq!(clock.time(), "00:00:01");
    }
}
