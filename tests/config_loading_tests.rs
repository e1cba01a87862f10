//! Config Loading Tests
//!
//! Exercises the TOML layer end to end: files on disk, typo detection,
//! advisory range checks, and how CLI overrides layer on top.

use std::io::Write;

use seconds_of_my_life::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use seconds_of_my_life::config::{ConfigError, LifeConfig};
use seconds_of_my_life::types::ParameterOverrides;
use seconds_of_my_life::{Breakdown, Horizon};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// ============================================================================
// Loading From Disk
// ============================================================================

#[test]
fn load_from_file_applies_overrides() {
    let file = write_config(
        r#"
[parameters]
activity_label = "Video games"
minutes_per_day = 120.0
daily_sleep_hours = 8.0
holiday_days_per_year = 30
show_percent = false

[display]
bar_width = 48
lifetime_active_years = 45.0
"#,
    );

    let config = LifeConfig::load_from_file(file.path()).expect("valid config");
    let p = config.parameters();
    assert_eq!(p.activity_label, "Video games");
    assert_eq!(p.minutes_per_day, 120.0);
    assert_eq!(p.daily_sleep_hours, 8.0);
    assert_eq!(p.holiday_hours_per_year, 720.0);
    assert!(!p.show_percent);
    // Untouched fields keep their defaults
    assert_eq!(p.daily_work_hours, 8.0);
    assert_eq!(p.weekly_work_days, 5);
    assert_eq!(config.display.bar_width, 48);
    assert_eq!(config.display.lifetime_active_years, 45.0);
}

#[test]
fn explicit_path_wins_the_search_order() {
    let file = write_config("[parameters]\nminutes_per_day = 15.0\n");
    let config = LifeConfig::load(Some(file.path()));
    assert_eq!(config.parameters().minutes_per_day, 15.0);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("[parameters\nminutes_per_day = ");
    let err = LifeConfig::load_from_file(file.path()).expect_err("malformed TOML");
    assert!(matches!(err, ConfigError::Parse(_, _)));
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let file = write_config("[parameters]\nholiday_days_per_year = 12.5\n");
    assert!(matches!(
        LifeConfig::load_from_file(file.path()),
        Err(ConfigError::Parse(_, _))
    ));
}

#[test]
fn dumped_config_loads_back_identically() {
    let original = LifeConfig::default().effective();
    let file = write_config(&original.to_toml().expect("serializable"));
    let loaded = LifeConfig::load_from_file(file.path()).expect("dumped config loads");
    assert_eq!(loaded, original);
    assert_eq!(loaded.parameters(), LifeConfig::default().parameters());
}

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_parameter_key_warns_with_suggestion() {
    let warnings = validate_unknown_keys("[parameters]\nminutes_per_dya = 90.0\n");
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert_eq!(warnings[0].field, "parameters.minutes_per_dya");
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("parameters.minutes_per_day")
    );
    assert!(warnings[0].to_string().contains("did you mean"));
}

#[test]
fn typo_in_section_name_warns() {
    let warnings = validate_unknown_keys("[dispaly]\nbar_width = 30\n");
    assert!(warnings.iter().any(|w| w.field == "dispaly"
        && w.suggestion.as_deref() == Some("display")));
}

#[test]
fn unrelated_key_has_no_suggestion() {
    let warnings = validate_unknown_keys("favourite_colour = \"green\"\n");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.is_none());
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = LifeConfig::default()
        .effective()
        .to_toml()
        .expect("serializable");
    assert!(validate_unknown_keys(&toml_str).is_empty());
}

#[test]
fn typo_does_not_block_loading() {
    let file = write_config("[parameters]\nsleep_hours = 9.0\ndaily_work_hours = 6.0\n");
    let config = LifeConfig::load_from_file(file.path()).expect("unknown keys are ignored");
    let p = config.parameters();
    assert_eq!(p.daily_work_hours, 6.0);
    assert_eq!(p.daily_sleep_hours, 7.5);
}

#[test]
fn known_keys_cover_every_dumped_field() {
    let known = known_config_keys();
    assert!(known.contains("parameters.holiday_days_per_year"));
    assert!(known.contains("display.lifetime_active_years"));
    assert_eq!(
        suggest_correction("display.bar_widht", &known).as_deref(),
        Some("display.bar_width")
    );
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn defaults_are_within_every_range() {
    assert!(validate_ranges(&LifeConfig::default()).is_empty());
}

#[test]
fn out_of_range_values_warn_but_apply() {
    let config = LifeConfig::from_toml_str(
        r#"
[parameters]
daily_sleep_hours = 20.0
holiday_days_per_year = 90
activity_label = "  "

[display]
lifetime_active_years = 80.0
"#,
    )
    .expect("parses");

    let fields: Vec<String> = validate_ranges(&config)
        .into_iter()
        .map(|w| w.field)
        .collect();
    assert!(fields.contains(&"parameters.daily_sleep_hours".to_string()));
    assert!(fields.contains(&"parameters.holiday_days_per_year".to_string()));
    assert!(fields.contains(&"parameters.activity_label".to_string()));
    assert!(fields.contains(&"display.lifetime_active_years".to_string()));

    // Still applied as written
    assert_eq!(config.parameters().daily_sleep_hours, 20.0);
}

#[test]
fn zero_monthly_work_days_warns() {
    let config =
        LifeConfig::from_toml_str("[parameters]\nmonthly_work_days = 0\n").expect("parses");
    let warnings = validate_ranges(&config);
    assert!(warnings
        .iter()
        .any(|w| w.field == "parameters.monthly_work_days"));
    assert!(config.parameters().holiday_months_per_year.is_infinite());
}

// ============================================================================
// Layering
// ============================================================================

#[test]
fn cli_overrides_layer_over_file_values() {
    let file = write_config("[parameters]\nminutes_per_day = 30.0\ndaily_work_hours = 6.0\n");
    let mut config = LifeConfig::load_from_file(file.path()).expect("valid config");
    config.parameters.merge(ParameterOverrides {
        minutes_per_day: Some(90.0),
        show_percent: Some(false),
        ..Default::default()
    });

    let p = config.parameters();
    assert_eq!(p.minutes_per_day, 90.0);
    assert_eq!(p.daily_work_hours, 6.0);
    assert!(!p.show_percent);
}

#[test]
fn display_active_years_reach_the_lifetime_bar() {
    let file = write_config("[display]\nlifetime_active_years = 30.0\n");
    let config = LifeConfig::load_from_file(file.path()).expect("valid config");
    let b = Breakdown::compute_with(&config.parameters(), config.display.lifetime_active_years);
    let life = b.horizon(Horizon::Lifetime).expect("lifetime horizon");
    let work = life
        .segment(seconds_of_my_life::Category::Work)
        .expect("work segment");
    assert_eq!(work.hours, 8.0 * 20.0 * 11.0 * 30.0);
}

#[test]
fn nan_active_years_in_file_warns() {
    let file = write_config("[display]\nlifetime_active_years = nan\n");
    let config = LifeConfig::load_from_file(file.path()).expect("valid config");
    assert!(validate_ranges(&config)
        .iter()
        .any(|w| w.field == "display.lifetime_active_years"));
}
