//! Category / horizon calculators
//!
//! Every function reads the current [`Parameters`] snapshot and returns
//! either absolute hours (`as_percent = false`) or the share of the
//! horizon in percent (`as_percent = true`). Nothing is cached.
//!
//! ## Horizons
//! - Day, week, month: computed from daily figures and work days.
//! - Year, decade, lifetime: the yearly calculators scaled by a period
//!   multiplier (`years`). Work, commute and holiday accrue over
//!   `active_years` only, which models retirement within a lifetime.
//!
//! "Other" is always the residual of the horizon within the requested
//! mode, so the categories of a horizon sum to its total hours (or to 100).

use crate::config::defaults;
use crate::types::{holiday_hours, Category, Horizon, Parameters};

/// Share of `total_hours` taken by `hours`, in percent.
pub fn hours_part(total_hours: f64, hours: f64) -> f64 {
    hours / total_hours * 100.0
}

fn express(as_percent: bool, total_hours: f64, hours: f64) -> f64 {
    if as_percent {
        hours_part(total_hours, hours)
    } else {
        hours
    }
}

/// What remains of `total` after subtracting every part.
fn residual(total: f64, parts: &[f64]) -> f64 {
    parts.iter().fold(total, |rest, part| rest - part)
}

fn residual_total(as_percent: bool, total_hours: f64) -> f64 {
    if as_percent {
        100.0
    } else {
        total_hours
    }
}

/// Active span for work, commute and holiday. A missing, zero or NaN
/// `active_years` means the whole period is active.
fn active_span(years: f64, active_years: Option<f64>) -> f64 {
    match active_years {
        Some(active) if active != 0.0 && !active.is_nan() => active,
        _ => years,
    }
}

// ============================================================================
// Daily
// ============================================================================

pub fn daily_sleep(p: &Parameters, as_percent: bool) -> f64 {
    express(as_percent, p.calendar.hours_per_day, p.daily_sleep_hours)
}

pub fn daily_work(p: &Parameters, as_percent: bool) -> f64 {
    express(as_percent, p.calendar.hours_per_day, p.daily_work_hours)
}

pub fn daily_commute(p: &Parameters, as_percent: bool) -> f64 {
    express(as_percent, p.calendar.hours_per_day, p.daily_commute_hours)
}

pub fn daily_activity(p: &Parameters, as_percent: bool) -> f64 {
    express(as_percent, p.calendar.hours_per_day, p.activity_hours_per_day())
}

pub fn daily_other(p: &Parameters, as_percent: bool) -> f64 {
    residual(
        residual_total(as_percent, p.calendar.hours_per_day),
        &[
            daily_sleep(p, as_percent),
            daily_work(p, as_percent),
            daily_commute(p, as_percent),
            daily_activity(p, as_percent),
        ],
    )
}

// ============================================================================
// Weekly
// ============================================================================

pub fn weekly_sleep(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_week,
        p.daily_sleep_hours * p.calendar.days_per_week,
    )
}

pub fn weekly_work(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_week,
        p.daily_work_hours * f64::from(p.weekly_work_days),
    )
}

/// Weekly commute.
///
/// The hours branch returns the *daily* commute unscaled while the
/// percent branch scales it by the weekly work days. Published figures
/// rely on this asymmetry, so it is kept as is.
pub fn weekly_commute(p: &Parameters, as_percent: bool) -> f64 {
    if as_percent {
        hours_part(
            p.calendar.hours_per_week,
            p.daily_commute_hours * f64::from(p.weekly_work_days),
        )
    } else {
        p.daily_commute_hours
    }
}

pub fn weekly_activity(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_week,
        p.activity_hours_per_day() * p.calendar.days_per_week,
    )
}

pub fn weekly_other(p: &Parameters, as_percent: bool) -> f64 {
    residual(
        residual_total(as_percent, p.calendar.hours_per_week),
        &[
            weekly_sleep(p, as_percent),
            weekly_work(p, as_percent),
            weekly_commute(p, as_percent),
            weekly_activity(p, as_percent),
        ],
    )
}

// ============================================================================
// Monthly
// ============================================================================

pub fn monthly_sleep(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_month,
        p.daily_sleep_hours * p.calendar.days_per_month,
    )
}

pub fn monthly_work(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_month,
        p.daily_work_hours * f64::from(p.monthly_work_days),
    )
}

pub fn monthly_commute(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_month,
        p.daily_commute_hours * f64::from(p.monthly_work_days),
    )
}

pub fn monthly_activity(p: &Parameters, as_percent: bool) -> f64 {
    express(
        as_percent,
        p.calendar.hours_per_month,
        p.activity_hours_per_day() * p.calendar.days_per_month,
    )
}

pub fn monthly_other(p: &Parameters, as_percent: bool) -> f64 {
    residual(
        residual_total(as_percent, p.calendar.hours_per_month),
        &[
            monthly_sleep(p, as_percent),
            monthly_work(p, as_percent),
            monthly_commute(p, as_percent),
            monthly_activity(p, as_percent),
        ],
    )
}

// ============================================================================
// Yearly (period multiplier `years`, active multiplier `active_years`)
// ============================================================================

fn yearly_total(p: &Parameters, years: f64) -> f64 {
    p.calendar.hours_per_year * years
}

pub fn yearly_sleep(p: &Parameters, as_percent: bool, years: f64) -> f64 {
    express(
        as_percent,
        yearly_total(p, years),
        p.daily_sleep_hours * p.calendar.days_per_year * years,
    )
}

/// Yearly work: 20 work days in each of 11 months, per active year.
pub fn yearly_work(p: &Parameters, as_percent: bool, years: f64, active_years: Option<f64>) -> f64 {
    express(
        as_percent,
        yearly_total(p, years),
        p.daily_work_hours
            * defaults::YEARLY_WORK_DAYS_PER_MONTH
            * defaults::YEARLY_ACTIVE_WORK_MONTHS
            * active_span(years, active_years),
    )
}

/// Yearly commute, on the same 20 x 11 day model as [`yearly_work`].
pub fn yearly_commute(
    p: &Parameters,
    as_percent: bool,
    years: f64,
    active_years: Option<f64>,
) -> f64 {
    express(
        as_percent,
        yearly_total(p, years),
        p.daily_commute_hours
            * defaults::YEARLY_WORK_DAYS_PER_MONTH
            * defaults::YEARLY_ACTIVE_WORK_MONTHS
            * active_span(years, active_years),
    )
}

/// Yearly holiday, derived from `holiday_days_per_year` on every call.
pub fn yearly_holiday(
    p: &Parameters,
    as_percent: bool,
    years: f64,
    active_years: Option<f64>,
) -> f64 {
    express(
        as_percent,
        yearly_total(p, years),
        holiday_hours(&p.calendar, p.holiday_days_per_year) * active_span(years, active_years),
    )
}

pub fn yearly_activity(p: &Parameters, as_percent: bool, years: f64) -> f64 {
    express(
        as_percent,
        yearly_total(p, years),
        p.activity_hours_per_day() * p.calendar.days_per_year * years,
    )
}

pub fn yearly_other(p: &Parameters, as_percent: bool, years: f64, active_years: Option<f64>) -> f64 {
    residual(
        residual_total(as_percent, yearly_total(p, years)),
        &[
            yearly_sleep(p, as_percent, years),
            yearly_work(p, as_percent, years, active_years),
            yearly_commute(p, as_percent, years, active_years),
            yearly_holiday(p, as_percent, years, active_years),
            yearly_activity(p, as_percent, years),
        ],
    )
}

// ============================================================================
// Decade and Lifetime
// ============================================================================

pub fn decade_sleep(p: &Parameters, as_percent: bool) -> f64 {
    yearly_sleep(p, as_percent, defaults::DECADE_YEARS)
}

pub fn decade_work(p: &Parameters, as_percent: bool) -> f64 {
    yearly_work(p, as_percent, defaults::DECADE_YEARS, None)
}

pub fn decade_commute(p: &Parameters, as_percent: bool) -> f64 {
    yearly_commute(p, as_percent, defaults::DECADE_YEARS, None)
}

pub fn decade_holiday(p: &Parameters, as_percent: bool) -> f64 {
    yearly_holiday(p, as_percent, defaults::DECADE_YEARS, None)
}

pub fn decade_activity(p: &Parameters, as_percent: bool) -> f64 {
    yearly_activity(p, as_percent, defaults::DECADE_YEARS)
}

pub fn decade_other(p: &Parameters, as_percent: bool) -> f64 {
    yearly_other(p, as_percent, defaults::DECADE_YEARS, None)
}

pub fn lifetime_sleep(p: &Parameters, as_percent: bool) -> f64 {
    yearly_sleep(p, as_percent, p.calendar.lifetime_years)
}

pub fn lifetime_work(p: &Parameters, as_percent: bool) -> f64 {
    yearly_work(
        p,
        as_percent,
        p.calendar.lifetime_years,
        Some(defaults::LIFETIME_ACTIVE_YEARS),
    )
}

pub fn lifetime_commute(p: &Parameters, as_percent: bool) -> f64 {
    yearly_commute(
        p,
        as_percent,
        p.calendar.lifetime_years,
        Some(defaults::LIFETIME_ACTIVE_YEARS),
    )
}

pub fn lifetime_holiday(p: &Parameters, as_percent: bool) -> f64 {
    yearly_holiday(
        p,
        as_percent,
        p.calendar.lifetime_years,
        Some(defaults::LIFETIME_ACTIVE_YEARS),
    )
}

pub fn lifetime_activity(p: &Parameters, as_percent: bool) -> f64 {
    yearly_activity(p, as_percent, p.calendar.lifetime_years)
}

pub fn lifetime_other(p: &Parameters, as_percent: bool) -> f64 {
    yearly_other(
        p,
        as_percent,
        p.calendar.lifetime_years,
        Some(defaults::LIFETIME_ACTIVE_YEARS),
    )
}

// ============================================================================
// Generic Dispatch
// ============================================================================

/// Period and active multipliers of a year-scale horizon.
///
/// Returns `None` for day, week and month.
pub fn year_scale_span(
    p: &Parameters,
    horizon: Horizon,
    lifetime_active_years: f64,
) -> Option<(f64, Option<f64>)> {
    match horizon {
        Horizon::Year => Some((1.0, None)),
        Horizon::Decade => Some((defaults::DECADE_YEARS, None)),
        Horizon::Lifetime => Some((p.calendar.lifetime_years, Some(lifetime_active_years))),
        Horizon::Day | Horizon::Week | Horizon::Month => None,
    }
}

/// Total hours in a horizon.
pub fn horizon_total_hours(p: &Parameters, horizon: Horizon) -> f64 {
    match horizon {
        Horizon::Day => p.calendar.hours_per_day,
        Horizon::Week => p.calendar.hours_per_week,
        Horizon::Month => p.calendar.hours_per_month,
        Horizon::Year => yearly_total(p, 1.0),
        Horizon::Decade => yearly_total(p, defaults::DECADE_YEARS),
        Horizon::Lifetime => yearly_total(p, p.calendar.lifetime_years),
    }
}

/// Calendar days in a horizon, used for the activity duration string.
pub fn horizon_days(p: &Parameters, horizon: Horizon) -> f64 {
    match horizon {
        Horizon::Day => 1.0,
        Horizon::Week => p.calendar.days_per_week,
        Horizon::Month => p.calendar.days_per_month,
        Horizon::Year => p.calendar.days_per_year,
        Horizon::Decade => p.calendar.days_per_year * defaults::DECADE_YEARS,
        Horizon::Lifetime => p.calendar.days_per_year * p.calendar.lifetime_years,
    }
}

/// Value of one category over one horizon with the default retirement
/// model. `None` when the category does not apply (holiday below a year).
pub fn category_value(
    p: &Parameters,
    horizon: Horizon,
    category: Category,
    as_percent: bool,
) -> Option<f64> {
    category_value_with(p, horizon, category, as_percent, defaults::LIFETIME_ACTIVE_YEARS)
}

/// Same as [`category_value`] with an explicit number of working years
/// within the lifetime horizon.
pub fn category_value_with(
    p: &Parameters,
    horizon: Horizon,
    category: Category,
    as_percent: bool,
    lifetime_active_years: f64,
) -> Option<f64> {
    if !category.applies_to(horizon) {
        return None;
    }

    let value = match year_scale_span(p, horizon, lifetime_active_years) {
        Some((years, active)) => match category {
            Category::Sleep => yearly_sleep(p, as_percent, years),
            Category::Commute => yearly_commute(p, as_percent, years, active),
            Category::Work => yearly_work(p, as_percent, years, active),
            Category::Activity => yearly_activity(p, as_percent, years),
            Category::Holiday => yearly_holiday(p, as_percent, years, active),
            Category::Other => yearly_other(p, as_percent, years, active),
        },
        None => {
            let calc: fn(&Parameters, bool) -> f64 = match (horizon, category) {
                (Horizon::Day, Category::Sleep) => daily_sleep,
                (Horizon::Day, Category::Commute) => daily_commute,
                (Horizon::Day, Category::Work) => daily_work,
                (Horizon::Day, Category::Activity) => daily_activity,
                (Horizon::Day, _) => daily_other,
                (Horizon::Week, Category::Sleep) => weekly_sleep,
                (Horizon::Week, Category::Commute) => weekly_commute,
                (Horizon::Week, Category::Work) => weekly_work,
                (Horizon::Week, Category::Activity) => weekly_activity,
                (Horizon::Week, _) => weekly_other,
                (_, Category::Sleep) => monthly_sleep,
                (_, Category::Commute) => monthly_commute,
                (_, Category::Work) => monthly_work,
                (_, Category::Activity) => monthly_activity,
                (_, _) => monthly_other,
            };
            calc(p, as_percent)
        }
    };

    Some(value)
}
