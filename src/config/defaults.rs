//! System-wide default constants.
//!
//! Centralises the widget defaults, the calendar approximations and the
//! slider ranges. Grouped by concern for easy discovery.

// ============================================================================
// Calendar
// ============================================================================

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_WEEK: f64 = 7.0;

/// A month is 30 days throughout.
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Length of the lifetime horizon (years).
pub const LIFETIME_YEARS: f64 = 70.0;

/// Length of the decade horizon (years).
pub const DECADE_YEARS: f64 = 10.0;

// ============================================================================
// Year-Scale Work Model
// ============================================================================

/// Work days per month used by the yearly work and commute figures.
///
/// Fixed: does not follow `monthly_work_days`.
pub const YEARLY_WORK_DAYS_PER_MONTH: f64 = 20.0;

/// Months per year in which work and commute accrue (one month of leave).
pub const YEARLY_ACTIVE_WORK_MONTHS: f64 = 11.0;

/// Working years within the lifetime horizon; the rest is retirement.
pub const LIFETIME_ACTIVE_YEARS: f64 = 40.0;

// ============================================================================
// Parameter Defaults
// ============================================================================

pub const ACTIVITY_LABEL: &str = "Mobile usage";
pub const MINUTES_PER_DAY: f64 = 193.0;
pub const DAILY_SLEEP_HOURS: f64 = 7.5;
pub const DAILY_WORK_HOURS: f64 = 8.0;
pub const DAILY_COMMUTE_HOURS: f64 = 1.0;
pub const WEEKLY_WORK_DAYS: u32 = 5;
pub const MONTHLY_WORK_DAYS: u32 = 20;
pub const HOLIDAY_DAYS_PER_YEAR: u32 = 25;
pub const SHOW_PERCENT: bool = true;

// ============================================================================
// Slider Ranges (advisory, enforced by the presentation layer only)
// ============================================================================

pub const MINUTES_PER_DAY_RANGE: (f64, f64) = (0.0, 420.0);
pub const DAILY_SLEEP_HOURS_RANGE: (f64, f64) = (4.0, 14.0);
pub const DAILY_WORK_HOURS_RANGE: (f64, f64) = (4.0, 14.0);
pub const DAILY_COMMUTE_HOURS_RANGE: (f64, f64) = (0.0, 6.0);
pub const HOLIDAY_DAYS_PER_YEAR_RANGE: (u32, u32) = (7, 60);

// ============================================================================
// Display
// ============================================================================

/// Characters per rendered text bar.
pub const BAR_WIDTH: usize = 60;

/// Decimal places of a percentage label.
pub const PERCENT_LABEL_SCALE: i32 = 1;

/// Decimal places of an hours label on day, week and month bars.
pub const SHORT_HOURS_LABEL_SCALE: i32 = 1;

/// Decimal places of an hours label on year-scale bars.
pub const LONG_HOURS_LABEL_SCALE: i32 = 0;
