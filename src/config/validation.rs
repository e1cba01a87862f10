//! Config validation: unknown-key detection with Levenshtein suggestions
//! and slider range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Nothing here rejects a config; every finding is a
//! warning and the value is applied as written.

use std::collections::HashSet;

use super::defaults;
use super::LifeConfig;

/// A non-fatal config warning (typo, out-of-range value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for LifeConfig.
///
/// Any new field added to LifeConfig must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [parameters]
        "parameters",
        "parameters.activity_label",
        "parameters.minutes_per_day",
        "parameters.daily_sleep_hours",
        "parameters.daily_work_hours",
        "parameters.daily_commute_hours",
        "parameters.weekly_work_days",
        "parameters.monthly_work_days",
        "parameters.holiday_days_per_year",
        "parameters.show_percent",
        // [display]
        "display",
        "display.bar_width",
        "display.lifetime_active_years",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the alphabetically first key so the suggestion is stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Parse errors are left to serde and produce no warnings here.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

fn check_range(
    warnings: &mut Vec<ValidationWarning>,
    field: &str,
    value: f64,
    (min, max): (f64, f64),
    unit: &str,
) {
    if value < min || value > max || value.is_nan() {
        warnings.push(ValidationWarning {
            field: field.to_string(),
            message: format!("{field} = {value} is outside the slider range ({min}-{max} {unit})"),
            suggestion: None,
        });
    }
}

/// Check the effective parameters against the slider ranges.
///
/// The store accepts anything; these warnings only tell the user that the
/// figures will look odd (negative "other", bars beyond 100%).
pub fn validate_ranges(config: &LifeConfig) -> Vec<ValidationWarning> {
    let p = config.parameters();
    let mut warnings = Vec::new();

    check_range(
        &mut warnings,
        "parameters.minutes_per_day",
        p.minutes_per_day,
        defaults::MINUTES_PER_DAY_RANGE,
        "minutes",
    );
    check_range(
        &mut warnings,
        "parameters.daily_sleep_hours",
        p.daily_sleep_hours,
        defaults::DAILY_SLEEP_HOURS_RANGE,
        "hours",
    );
    check_range(
        &mut warnings,
        "parameters.daily_work_hours",
        p.daily_work_hours,
        defaults::DAILY_WORK_HOURS_RANGE,
        "hours",
    );
    check_range(
        &mut warnings,
        "parameters.daily_commute_hours",
        p.daily_commute_hours,
        defaults::DAILY_COMMUTE_HOURS_RANGE,
        "hours",
    );

    let (min_days, max_days) = defaults::HOLIDAY_DAYS_PER_YEAR_RANGE;
    check_range(
        &mut warnings,
        "parameters.holiday_days_per_year",
        f64::from(p.holiday_days_per_year),
        (f64::from(min_days), f64::from(max_days)),
        "days",
    );

    if p.activity_label.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "parameters.activity_label".to_string(),
            message: "activity_label is empty".to_string(),
            suggestion: None,
        });
    }

    if p.monthly_work_days == 0 {
        warnings.push(ValidationWarning {
            field: "parameters.monthly_work_days".to_string(),
            message: "monthly_work_days = 0 makes holiday months infinite".to_string(),
            suggestion: None,
        });
    }

    let active = config.display.lifetime_active_years;
    if active < 0.0 || active > p.calendar.lifetime_years || active.is_nan() {
        warnings.push(ValidationWarning {
            field: "display.lifetime_active_years".to_string(),
            message: format!(
                "lifetime_active_years = {active} is outside the lifetime (0-{} years)",
                p.calendar.lifetime_years
            ),
            suggestion: None,
        });
    }

    if config.display.bar_width == 0 {
        warnings.push(ValidationWarning {
            field: "display.bar_width".to_string(),
            message: "bar_width = 0 renders empty bars".to_string(),
            suggestion: None,
        });
    }

    warnings
}

// ============================================================================
// Tests
// ============================================================================
