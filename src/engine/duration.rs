//! Compound duration strings ("2 y, 3 m, 1 w")
//!
//! Seconds are decomposed over a fixed unit ladder: 12 months per year,
//! 4 weeks per month, 7 days per week, 24 hours, 60 minutes, 60 seconds.
//! The 4-week month is intentional and must not be replaced with a real
//! calendar; published strings depend on it.

use serde::Serialize;

/// Default unit labels, coarsest first.
pub const DEFAULT_UNIT_LABELS: [&str; 7] = ["y", "m", "w", "d", "hr", "min", "sec"];

/// Radix of each unit below years, coarsest first.
const RADICES: [i64; 6] = [12, 4, 7, 24, 60, 60];

/// Shown in place of a label the caller did not supply.
const MISSING_LABEL: &str = "?";

/// One integer count per unit, years unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DurationParts {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationParts {
    /// Decompose whole seconds, finest unit first.
    ///
    /// Remainders keep the sign of the input, so a negative duration yields
    /// negative components rather than borrowing from the coarser unit.
    pub fn from_seconds(total_seconds: i64) -> Self {
        let mut counts = [0_i64; 7];
        let mut rest = total_seconds;
        for (slot, radix) in RADICES.iter().enumerate().rev() {
            counts[slot + 1] = rest % radix;
            rest /= radix;
        }
        counts[0] = rest;

        Self {
            years: counts[0],
            months: counts[1],
            weeks: counts[2],
            days: counts[3],
            hours: counts[4],
            minutes: counts[5],
            seconds: counts[6],
        }
    }

    /// Components coarsest first.
    pub fn as_array(&self) -> [i64; 7] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|&c| c == 0)
    }

    /// Non-zero components as `"<count> <label>"`, joined with ", ".
    pub fn to_label(&self, unit_labels: &[&str]) -> String {
        self.as_array()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count != 0)
            .map(|(i, count)| {
                let label = unit_labels.get(i).copied().unwrap_or(MISSING_LABEL);
                format!("{count} {label}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format a number of seconds with the default unit labels.
///
/// Fractional seconds are truncated; NaN counts as zero.
///
/// ```
/// use seconds_of_my_life::engine::format_duration;
/// assert_eq!(format_duration(3661.0), "1 hr, 1 min, 1 sec");
/// assert_eq!(format_duration(0.0), "");
/// ```
pub fn format_duration(total_seconds: f64) -> String {
    format_duration_with(total_seconds, &DEFAULT_UNIT_LABELS)
}

/// Format a number of seconds with caller-supplied unit labels, coarsest
/// first. Missing labels are rendered as `?`.
pub fn format_duration_with(total_seconds: f64, unit_labels: &[&str]) -> String {
    // `as` saturates at the i64 bounds and maps NaN to 0
    let whole = total_seconds.trunc() as i64;
    DurationParts::from_seconds(whole).to_label(unit_labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(format_duration(0.0), "");
        assert!(DurationParts::from_seconds(0).is_zero());
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration(90.0), "1 min, 30 sec");
    }

    #[test]
    fn test_hour_minute_second() {
        assert_eq!(format_duration(3661.0), "1 hr, 1 min, 1 sec");
    }

    #[test]
    fn test_zero_components_are_skipped() {
        // 1 day exactly
        assert_eq!(format_duration(86_400.0), "1 d");
        // 1 week + 1 second
        assert_eq!(format_duration(604_801.0), "1 w, 1 sec");
    }

    #[test]
    fn test_four_week_month() {
        // 28 days is one month on this ladder
        assert_eq!(format_duration(28.0 * 86_400.0), "1 m");
        // 12 such months make a year of 336 days
        assert_eq!(format_duration(336.0 * 86_400.0), "1 y");
    }

    #[test]
    fn test_default_daily_activity() {
        // 193 minutes
        assert_eq!(format_duration(193.0 * 60.0), "3 hr, 13 min");
    }

    #[test]
    fn test_default_yearly_activity() {
        // 193 min * 365 days = 70 445 min = 48 d 22 hr 5 min
        assert_eq!(format_duration(193.0 * 60.0 * 365.0), "1 m, 2 w, 6 d, 22 hr, 5 min");
    }

    #[test]
    fn test_parts_decomposition() {
        let parts = DurationParts::from_seconds(3661);
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 1);
        assert_eq!(parts.days, 0);
    }

    #[test]
    fn test_fraction_truncated() {
        assert_eq!(format_duration(90.9), "1 min, 30 sec");
    }

    #[test]
    fn test_custom_labels() {
        let labels = ["years", "months", "weeks", "days", "hours", "minutes", "seconds"];
        assert_eq!(format_duration_with(3661.0, &labels), "1 hours, 1 minutes, 1 seconds");
    }

    #[test]
    fn test_short_label_list_uses_placeholder() {
        assert_eq!(format_duration_with(61.0, &["y", "m"]), "1 ?, 1 ?");
    }

    #[test]
    fn test_negative_keeps_sign_per_component() {
        assert_eq!(format_duration(-90.0), "-1 min, -30 sec");
    }

    #[test]
    fn test_nan_formats_as_empty() {
        assert_eq!(format_duration(f64::NAN), "");
    }
}
