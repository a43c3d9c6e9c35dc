//! Night window: decides whether "now" falls between sunset and sunrise.
//!
//! Sunrise and sunset are anchored on `now`'s calendar date, so the check
//! is a same-day comparison: at 01:00 the window is "before today's
//! sunrise", never "after yesterday's sunset". Windows that cross midnight
//! on the neighbouring day (a sunrise that is tomorrow relative to `now`)
//! are an accepted approximation and are not special-cased.

use chrono::{NaiveTime, Timelike};

use crate::time::LocalTime;

/// Format of provider time-of-day strings, e.g. `"07:15 AM"`.
pub const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";

/// Fallback window used when astronomy strings cannot be parsed:
/// night is before 07:00 or from 19:00 on.
pub const FALLBACK_SUNRISE_HOUR: u32 = 7;
pub const FALLBACK_SUNSET_HOUR: u32 = 19;

/// How a [`NightWindow`] verdict was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSource {
    /// Computed from the provider's sunrise and sunset.
    Astronomy,
    /// The fixed-hour heuristic, because `unparsed` was not a valid time of day.
    Fallback { unparsed: String },
}

/// Outcome of evaluating the night window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightWindow {
    pub is_night: bool,
    pub source: WindowSource,
}

impl NightWindow {
    /// Evaluate the window for `now` against today's sunrise and sunset.
    ///
    /// Never fails: unparseable strings select the fixed-hour fallback,
    /// which callers are expected to log.
    #[must_use]
    pub fn evaluate(now: LocalTime, sunrise: &str, sunset: &str) -> Self {
        let parsed = parse_time_of_day(sunrise)
            .and_then(|rise| parse_time_of_day(sunset).map(|set| (rise, set)));

        match parsed {
            Ok((rise, set)) => {
                let date = now.date();
                let sunrise_today = date.and_time(rise);
                let sunset_today = date.and_time(set);
                Self {
                    is_night: now < sunrise_today || now >= sunset_today,
                    source: WindowSource::Astronomy,
                }
            }
            Err(unparsed) => {
                let hour = now.hour();
                Self {
                    is_night: hour < FALLBACK_SUNRISE_HOUR || hour >= FALLBACK_SUNSET_HOUR,
                    source: WindowSource::Fallback { unparsed },
                }
            }
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, WindowSource::Fallback { .. })
    }
}

/// Whether `now` is in the night window. See [`NightWindow::evaluate`].
#[must_use]
pub fn is_night(now: LocalTime, sunrise: &str, sunset: &str) -> bool {
    NightWindow::evaluate(now, sunrise, sunset).is_night
}

fn parse_time_of_day(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).map_err(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> LocalTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn should_be_night_before_sunrise() {
        assert!(is_night(at(2, 0), "06:00 AM", "07:00 PM"));
    }

    #[test]
    fn should_be_day_between_sunrise_and_sunset() {
        assert!(!is_night(at(12, 0), "06:00 AM", "07:00 PM"));
    }

    #[test]
    fn should_be_day_exactly_at_sunrise() {
        assert!(!is_night(at(6, 0), "06:00 AM", "07:00 PM"));
    }

    #[test]
    fn should_be_night_exactly_at_sunset() {
        assert!(is_night(at(19, 0), "06:00 AM", "07:00 PM"));
    }

    #[test]
    fn should_be_night_after_sunset() {
        assert!(is_night(at(23, 30), "07:15 AM", "07:20 PM"));
    }

    #[test]
    fn should_report_astronomy_source_when_strings_parse() {
        let window = NightWindow::evaluate(at(2, 0), "06:00 AM", "07:00 PM");
        assert_eq!(window.source, WindowSource::Astronomy);
        assert!(!window.is_fallback());
    }

    #[test]
    fn should_accept_lowercase_marker_and_surrounding_whitespace() {
        assert!(!is_night(at(12, 0), " 06:00 am ", "07:00 pm"));
    }

    #[test]
    fn should_fall_back_to_night_at_three_when_unparseable() {
        let window = NightWindow::evaluate(at(3, 0), "sometime", "later");
        assert!(window.is_night);
        assert_eq!(
            window.source,
            WindowSource::Fallback {
                unparsed: "sometime".to_string()
            }
        );
    }

    #[test]
    fn should_fall_back_to_day_at_noon_when_unparseable() {
        assert!(!is_night(at(12, 0), "garbage", "garbage"));
    }

    #[test]
    fn should_fall_back_when_only_sunset_is_unparseable() {
        let window = NightWindow::evaluate(at(20, 0), "06:00 AM", "19:00");
        assert!(window.is_night);
        assert!(window.is_fallback());
    }

    #[test]
    fn should_use_fallback_boundaries_at_seven_and_nineteen() {
        assert!(is_night(at(6, 59), "", ""));
        assert!(!is_night(at(7, 0), "", ""));
        assert!(!is_night(at(18, 59), "", ""));
        assert!(is_night(at(19, 0), "", ""));
    }

    #[test]
    fn should_compare_against_same_day_only_after_midnight() {
        // 00:30 with a late sunset is "before today's sunrise", hence night.
        assert!(is_night(at(0, 30), "06:00 AM", "11:45 PM"));
    }
}
