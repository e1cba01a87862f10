//! Shared data structures for the life-time breakdown
//!
//! This module defines the records the rest of the crate passes around:
//! - `Parameters`: the single mutable record of base parameters
//! - `CalendarConstants`: fixed calendar lengths, never mutated
//! - `ParameterOverrides`: optional initialization input
//! - `Horizon` / `Category`: the axes of every computed value

use serde::{Deserialize, Serialize};

use crate::config::defaults;

// ============================================================================
// Calendar Constants
// ============================================================================

/// Fixed calendar lengths used by every calculator.
///
/// The month is 30 days and the year 365 days; these are the approximations
/// the published figures are built on, not a real calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarConstants {
    pub hours_per_day: f64,
    pub hours_per_week: f64,
    pub hours_per_month: f64,
    pub hours_per_year: f64,
    pub days_per_week: f64,
    pub days_per_month: f64,
    pub days_per_year: f64,
    pub lifetime_years: f64,
    pub months_per_year: f64,
}

impl Default for CalendarConstants {
    fn default() -> Self {
        Self {
            hours_per_day: defaults::HOURS_PER_DAY,
            hours_per_week: defaults::HOURS_PER_DAY * defaults::DAYS_PER_WEEK,
            hours_per_month: defaults::HOURS_PER_DAY * defaults::DAYS_PER_MONTH,
            hours_per_year: defaults::HOURS_PER_DAY * defaults::DAYS_PER_YEAR,
            days_per_week: defaults::DAYS_PER_WEEK,
            days_per_month: defaults::DAYS_PER_MONTH,
            days_per_year: defaults::DAYS_PER_YEAR,
            lifetime_years: defaults::LIFETIME_YEARS,
            months_per_year: defaults::MONTHS_PER_YEAR,
        }
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// The base parameters every derived value is computed from.
///
/// Created once per session through [`Parameters::new`] and then mutated
/// only through [`crate::store::ParameterStore`]. Ranges are not enforced
/// here: out-of-range values flow straight into the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Name of the tracked activity ("Mobile usage")
    pub activity_label: String,
    /// Minutes spent on the tracked activity each day
    pub minutes_per_day: f64,
    pub daily_sleep_hours: f64,
    pub daily_work_hours: f64,
    pub daily_commute_hours: f64,
    pub weekly_work_days: u32,
    pub monthly_work_days: u32,
    pub holiday_days_per_year: u32,
    /// Cached `hours_per_day * holiday_days_per_year`
    pub holiday_hours_per_year: f64,
    /// Cached `holiday_days_per_year / monthly_work_days`
    pub holiday_months_per_year: f64,
    /// Render percentages instead of hours
    pub show_percent: bool,
    pub calendar: CalendarConstants,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(&ParameterOverrides::default())
    }
}

impl Parameters {
    /// Build a fresh record from the built-in defaults, replacing every
    /// field the overrides carry.
    pub fn new(overrides: &ParameterOverrides) -> Self {
        let calendar = CalendarConstants::default();
        let monthly_work_days = overrides
            .monthly_work_days
            .unwrap_or(defaults::MONTHLY_WORK_DAYS);
        let holiday_days_per_year = overrides
            .holiday_days_per_year
            .unwrap_or(defaults::HOLIDAY_DAYS_PER_YEAR);

        Self {
            activity_label: overrides
                .activity_label
                .clone()
                .unwrap_or_else(|| defaults::ACTIVITY_LABEL.to_string()),
            minutes_per_day: overrides.minutes_per_day.unwrap_or(defaults::MINUTES_PER_DAY),
            daily_sleep_hours: overrides
                .daily_sleep_hours
                .unwrap_or(defaults::DAILY_SLEEP_HOURS),
            daily_work_hours: overrides
                .daily_work_hours
                .unwrap_or(defaults::DAILY_WORK_HOURS),
            daily_commute_hours: overrides
                .daily_commute_hours
                .unwrap_or(defaults::DAILY_COMMUTE_HOURS),
            weekly_work_days: overrides
                .weekly_work_days
                .unwrap_or(defaults::WEEKLY_WORK_DAYS),
            monthly_work_days,
            holiday_days_per_year,
            holiday_hours_per_year: holiday_hours(&calendar, holiday_days_per_year),
            holiday_months_per_year: holiday_months(holiday_days_per_year, monthly_work_days),
            show_percent: overrides.show_percent.unwrap_or(defaults::SHOW_PERCENT),
            calendar,
        }
    }

    /// Tracked activity expressed in hours per day.
    pub fn activity_hours_per_day(&self) -> f64 {
        self.minutes_per_day / 60.0
    }
}

/// Holiday hours accrued per year for a number of holiday days.
pub(crate) fn holiday_hours(calendar: &CalendarConstants, days: u32) -> f64 {
    calendar.hours_per_day * f64::from(days)
}

/// Holiday days expressed in working months. Infinite or NaN when
/// `monthly_work_days` is zero.
pub(crate) fn holiday_months(days: u32, monthly_work_days: u32) -> f64 {
    f64::from(days) / f64::from(monthly_work_days)
}

// ============================================================================
// Initialization Overrides
// ============================================================================

/// Optional initialization input. Every `None` falls back to the default.
///
/// Deserialized from the `[parameters]` table of the config file and
/// merged with CLI flags before the session starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_work_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_commute_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_work_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_work_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_days_per_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_percent: Option<bool>,
}

impl ParameterOverrides {
    /// Layer `other` on top of `self`: fields set in `other` win.
    pub fn merge(&mut self, other: ParameterOverrides) {
        if other.activity_label.is_some() {
            self.activity_label = other.activity_label;
        }
        self.minutes_per_day = other.minutes_per_day.or(self.minutes_per_day);
        self.daily_sleep_hours = other.daily_sleep_hours.or(self.daily_sleep_hours);
        self.daily_work_hours = other.daily_work_hours.or(self.daily_work_hours);
        self.daily_commute_hours = other.daily_commute_hours.or(self.daily_commute_hours);
        self.weekly_work_days = other.weekly_work_days.or(self.weekly_work_days);
        self.monthly_work_days = other.monthly_work_days.or(self.monthly_work_days);
        self.holiday_days_per_year = other.holiday_days_per_year.or(self.holiday_days_per_year);
        self.show_percent = other.show_percent.or(self.show_percent);
    }
}

// ============================================================================
// Horizons and Categories
// ============================================================================

/// A period over which time is aggregated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Day,
    Week,
    Month,
    Year,
    Decade,
    Lifetime,
}

impl Horizon {
    pub const ALL: [Horizon; 6] = [
        Horizon::Day,
        Horizon::Week,
        Horizon::Month,
        Horizon::Year,
        Horizon::Decade,
        Horizon::Lifetime,
    ];

    /// Headline used in front of the duration string.
    pub fn display_name(&self) -> &'static str {
        match self {
            Horizon::Day => "Each day",
            Horizon::Week => "Each week",
            Horizon::Month => "Each month",
            Horizon::Year => "Each year",
            Horizon::Decade => "Each decade",
            Horizon::Lifetime => "A lifetime",
        }
    }

    /// Year, decade and lifetime reuse the yearly calculators and carry a
    /// holiday category.
    pub fn is_year_scale(&self) -> bool {
        matches!(self, Horizon::Year | Horizon::Decade | Horizon::Lifetime)
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Horizon::Day => "day",
            Horizon::Week => "week",
            Horizon::Month => "month",
            Horizon::Year => "year",
            Horizon::Decade => "decade",
            Horizon::Lifetime => "lifetime",
        };
        write!(f, "{name}")
    }
}

/// An activity bucket. Declaration order is display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sleep,
    Commute,
    Work,
    /// The user-named activity
    Activity,
    Holiday,
    /// Residual: whatever the other categories leave of the horizon
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sleep,
        Category::Commute,
        Category::Work,
        Category::Activity,
        Category::Holiday,
        Category::Other,
    ];

    /// Categories shown for a horizon, in display order.
    pub fn for_horizon(horizon: Horizon) -> Vec<Category> {
        Self::ALL
            .into_iter()
            .filter(|c| c.applies_to(horizon))
            .collect()
    }

    pub fn applies_to(&self, horizon: Horizon) -> bool {
        *self != Category::Holiday || horizon.is_year_scale()
    }

    /// Legend name; the tracked activity uses the user's label instead.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Sleep => "Sleep",
            Category::Commute => "Commute",
            Category::Work => "Work",
            Category::Activity => "Activity",
            Category::Holiday => "Holiday",
            Category::Other => "Other",
        }
    }

    /// Glyph used when drawing the segmented text bar
    pub fn glyph(&self) -> char {
        match self {
            Category::Sleep => 'z',
            Category::Commute => '~',
            Category::Work => 'W',
            Category::Activity => '#',
            Category::Holiday => 'H',
            Category::Other => '.',
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tests
// ============================================================================
