//! Seconds Of My Life - command-line widget
//!
//! Renders how much of a day, week, month, year and lifetime goes to one
//! activity, next to sleep, work, commute and holidays.
//!
//! # Usage
//!
//! ```bash
//! # Defaults (193 minutes a day of "Mobile usage")
//! seconds-of-my-life
//!
//! # Override a few parameters and show hours instead of percentages
//! seconds-of-my-life --activity Reading --minutes 45 --sleep 8 --hours
//!
//! # Machine-readable output
//! seconds-of-my-life --json
//!
//! # Adjust parameters line by line
//! seconds-of-my-life --interactive
//! ```
//!
//! # Environment Variables
//!
//! - `SOML_CONFIG`: Path to a TOML config file (default: ./life_config.toml)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use seconds_of_my_life::config::LifeConfig;
use seconds_of_my_life::types::ParameterOverrides;
use seconds_of_my_life::widget::Widget;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "seconds-of-my-life")]
#[command(about = "How much of your life goes to one activity")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Name of the tracked activity
    #[arg(long, value_name = "LABEL")]
    activity: Option<String>,

    /// Minutes per day spent on the activity
    #[arg(long)]
    minutes: Option<f64>,

    /// Daily sleep hours
    #[arg(long)]
    sleep: Option<f64>,

    /// Daily work hours
    #[arg(long)]
    work: Option<f64>,

    /// Daily commute hours
    #[arg(long)]
    commute: Option<f64>,

    /// Work days per week
    #[arg(long)]
    weekly_work_days: Option<u32>,

    /// Work days per month
    #[arg(long)]
    monthly_work_days: Option<u32>,

    /// Paid holiday days per year
    #[arg(long)]
    holidays: Option<u32>,

    /// Show hours instead of percentages
    #[arg(long)]
    hours: bool,

    /// Print the breakdown as JSON
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Read commands from stdin and re-render after each change
    #[arg(short, long)]
    interactive: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

impl CliArgs {
    /// Flags given on the command line, as a layer over the config file.
    fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            activity_label: self.activity.clone(),
            minutes_per_day: self.minutes,
            daily_sleep_hours: self.sleep,
            daily_work_hours: self.work,
            daily_commute_hours: self.commute,
            weekly_work_days: self.weekly_work_days,
            monthly_work_days: self.monthly_work_days,
            holiday_days_per_year: self.holidays,
            show_percent: self.hours.then_some(false),
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the widget only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = LifeConfig::load(args.config.as_deref());
    config.parameters.merge(args.overrides());
    config.log_range_warnings();

    if args.dump_config {
        let toml = config
            .effective()
            .to_toml()
            .context("Failed to serialize configuration")?;
        print!("{toml}");
        return Ok(());
    }

    let params = config.parameters();
    info!(
        activity = %params.activity_label,
        minutes = params.minutes_per_day,
        "Starting widget"
    );
    let mut widget = Widget::new(params, config.display.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.interactive {
        let stdin = io::stdin();
        widget
            .run(stdin.lock(), &mut out)
            .context("Interactive session failed")?;
    } else if args.json {
        let json = widget.render_json().context("Failed to render JSON")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", widget.render_text())?;
    }

    Ok(())
}
