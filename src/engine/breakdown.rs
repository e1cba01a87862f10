//! Whole-widget read model
//!
//! Gathers everything a renderer needs for one frame: the activity
//! duration per horizon and, per category, hours, percentage and the
//! label text. Built fresh from the current parameters on every call.

use serde::Serialize;

use super::calculators::{category_value_with, horizon_days, horizon_total_hours};
use super::duration::format_duration;
use super::rounding::round_to_scale;
use crate::config::defaults;
use crate::types::{Category, Horizon, Parameters};

/// One bar segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub category: Category,
    /// Legend text; the tracked activity carries the user's label
    pub name: String,
    pub hours: f64,
    /// Unrounded share of the horizon, used as bar width
    pub percent: f64,
    /// Rounded value with its unit, according to the display mode
    pub label: String,
}

/// One horizon: headline duration plus the segmented bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonBreakdown {
    pub horizon: Horizon,
    pub total_hours: f64,
    /// Time spent on the activity over the horizon ("1 m, 2 w, 6 d")
    pub activity_duration: String,
    pub segments: Vec<Segment>,
}

impl HorizonBreakdown {
    pub fn segment(&self, category: Category) -> Option<&Segment> {
        self.segments.iter().find(|s| s.category == category)
    }
}

/// Every horizon for the current parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub activity_label: String,
    pub show_percent: bool,
    pub horizons: Vec<HorizonBreakdown>,
}

impl Breakdown {
    /// Compute with the default 40 working years per lifetime.
    pub fn compute(p: &Parameters) -> Self {
        Self::compute_with(p, defaults::LIFETIME_ACTIVE_YEARS)
    }

    pub fn compute_with(p: &Parameters, lifetime_active_years: f64) -> Self {
        let horizons = Horizon::ALL
            .into_iter()
            .map(|horizon| horizon_breakdown(p, horizon, lifetime_active_years))
            .collect();

        Self {
            activity_label: p.activity_label.clone(),
            show_percent: p.show_percent,
            horizons,
        }
    }

    pub fn horizon(&self, horizon: Horizon) -> Option<&HorizonBreakdown> {
        self.horizons.iter().find(|h| h.horizon == horizon)
    }
}

/// Seconds spent on the tracked activity over a horizon.
pub fn activity_seconds(p: &Parameters, horizon: Horizon) -> f64 {
    p.minutes_per_day * 60.0 * horizon_days(p, horizon)
}

/// Duration string of the tracked activity over a horizon.
pub fn activity_duration(p: &Parameters, horizon: Horizon) -> String {
    format_duration(activity_seconds(p, horizon))
}

/// Label shown inside a bar segment.
///
/// Percentages keep one decimal. Hours keep one decimal below a year and
/// none from a year up.
pub fn segment_label(horizon: Horizon, hours: f64, percent: f64, show_percent: bool) -> String {
    if show_percent {
        format!("{}%", round_to_scale(percent, defaults::PERCENT_LABEL_SCALE))
    } else {
        let scale = if horizon.is_year_scale() {
            defaults::LONG_HOURS_LABEL_SCALE
        } else {
            defaults::SHORT_HOURS_LABEL_SCALE
        };
        format!("{}h", round_to_scale(hours, scale))
    }
}

fn horizon_breakdown(p: &Parameters, horizon: Horizon, lifetime_active_years: f64) -> HorizonBreakdown {
    let segments = Category::for_horizon(horizon)
        .into_iter()
        .filter_map(|category| {
            let hours =
                category_value_with(p, horizon, category, false, lifetime_active_years)?;
            let percent =
                category_value_with(p, horizon, category, true, lifetime_active_years)?;
            let name = match category {
                Category::Activity => p.activity_label.clone(),
                other => other.display_name().to_string(),
            };
            Some(Segment {
                category,
                name,
                hours,
                percent,
                label: segment_label(horizon, hours, percent, p.show_percent),
            })
        })
        .collect();

    HorizonBreakdown {
        horizon,
        total_hours: horizon_total_hours(p, horizon),
        activity_duration: activity_duration(p, horizon),
        segments,
    }
}
