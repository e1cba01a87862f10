//! Parameter Store
//!
//! Owns the single [`Parameters`] record of a session and exposes one
//! setter per user-adjustable field. Setters never validate: slider ranges
//! belong to the presentation layer, and out-of-range input simply yields
//! unusual figures downstream.

use tracing::debug;

use crate::types::{holiday_hours, holiday_months, Parameters};

/// Holds the current parameters and applies user edits in place.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: Parameters,
}

impl ParameterStore {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    /// Current snapshot, read by the engine on every render.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn set_activity_label(&mut self, label: impl Into<String>) {
        self.params.activity_label = label.into();
        debug!(label = %self.params.activity_label, "activity label updated");
    }

    pub fn set_show_percent(&mut self, show_percent: bool) {
        self.params.show_percent = show_percent;
        debug!(show_percent, "display mode updated");
    }

    pub fn set_minutes_per_day(&mut self, minutes: f64) {
        self.params.minutes_per_day = minutes;
        debug!(minutes, "minutes per day updated");
    }

    pub fn set_daily_work_hours(&mut self, hours: f64) {
        self.params.daily_work_hours = hours;
        debug!(hours, "daily work hours updated");
    }

    pub fn set_daily_commute_hours(&mut self, hours: f64) {
        self.params.daily_commute_hours = hours;
        debug!(hours, "daily commute hours updated");
    }

    pub fn set_daily_sleep_hours(&mut self, hours: f64) {
        self.params.daily_sleep_hours = hours;
        debug!(hours, "daily sleep hours updated");
    }

    /// Also refreshes the cached holiday hours and holiday months.
    pub fn set_holiday_days_per_year(&mut self, days: u32) {
        let p = &mut self.params;
        p.holiday_days_per_year = days;
        p.holiday_hours_per_year = holiday_hours(&p.calendar, days);
        p.holiday_months_per_year = holiday_months(days, p.monthly_work_days);
        debug!(
            days,
            hours = p.holiday_hours_per_year,
            months = p.holiday_months_per_year,
            "holiday days updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculators::{daily_sleep, lifetime_sleep, weekly_sleep, yearly_holiday};

    #[test]
    fn test_setter_replaces_only_its_field() {
        let mut store = ParameterStore::default();
        store.set_daily_work_hours(10.0);
        let p = store.params();
        assert_eq!(p.daily_work_hours, 10.0);
        assert_eq!(p.daily_sleep_hours, 7.5);
        assert_eq!(p.daily_commute_hours, 1.0);
        assert_eq!(p.minutes_per_day, 193.0);
    }

    #[test]
    fn test_holiday_setter_refreshes_derived_fields() {
        let mut store = ParameterStore::default();
        store.set_holiday_days_per_year(30);
        let p = store.params();
        assert_eq!(p.holiday_days_per_year, 30);
        assert_eq!(p.holiday_hours_per_year, 720.0);
        assert_eq!(p.holiday_months_per_year, 1.5);
        assert_eq!(yearly_holiday(p, false, 1.0, None), 720.0);
    }

    #[test]
    fn test_sleep_change_is_visible_immediately() {
        let mut store = ParameterStore::default();
        assert_eq!(daily_sleep(store.params(), false), 7.5);
        store.set_daily_sleep_hours(9.0);
        assert_eq!(daily_sleep(store.params(), false), 9.0);
        assert_eq!(weekly_sleep(store.params(), false), 63.0);
        assert_eq!(lifetime_sleep(store.params(), false), 9.0 * 365.0 * 70.0);
    }

    #[test]
    fn test_out_of_range_values_are_accepted() {
        let mut store = ParameterStore::default();
        store.set_daily_commute_hours(-3.0);
        store.set_minutes_per_day(5000.0);
        assert_eq!(store.params().daily_commute_hours, -3.0);
        assert_eq!(store.params().minutes_per_day, 5000.0);
    }

    #[test]
    fn test_label_and_mode() {
        let mut store = ParameterStore::default();
        store.set_activity_label("Reading");
        store.set_show_percent(false);
        assert_eq!(store.params().activity_label, "Reading");
        assert!(!store.params().show_percent);
    }

    #[test]
    fn test_empty_label_is_accepted() {
        let mut store = ParameterStore::default();
        store.set_activity_label("");
        assert!(store.params().activity_label.is_empty());
    }
}
