//! Text widget
//!
//! Thin presentation adapter over the store and the engine. It turns
//! commands into setter calls and renders a fresh [`Breakdown`] whenever
//! asked. No figures are computed here.
//!
//! Interactive sessions read one command per line:
//! `echo -e "sleep 8\nshow" | seconds-of-my-life --interactive`

pub mod command;
pub mod render;

pub use command::{Command, CommandError, HELP};
pub use render::{render_bar, render_text, segment_widths};

use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::engine::Breakdown;
use crate::store::ParameterStore;
use crate::types::Parameters;

/// What the caller should print after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A frame or message to print
    Output(String),
    /// Parameters changed; the caller decides whether to re-render
    Updated,
    /// End of session
    Quit,
}

/// A store plus display options.
#[derive(Debug, Clone)]
pub struct Widget {
    store: ParameterStore,
    display: DisplayConfig,
}

impl Widget {
    pub fn new(params: Parameters, display: DisplayConfig) -> Self {
        Self {
            store: ParameterStore::new(params),
            display,
        }
    }

    pub fn params(&self) -> &Parameters {
        self.store.params()
    }

    /// Recomputed on every call.
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::compute_with(self.store.params(), self.display.lifetime_active_years)
    }

    pub fn render_text(&self) -> String {
        render_text(&self.breakdown(), self.display.bar_width)
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.breakdown())
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Result<Reply, serde_json::Error> {
        let reply = match command {
            Command::SetLabel(label) => {
                self.store.set_activity_label(label);
                Reply::Updated
            }
            Command::SetMinutes(minutes) => {
                self.store.set_minutes_per_day(minutes);
                Reply::Updated
            }
            Command::SetSleep(hours) => {
                self.store.set_daily_sleep_hours(hours);
                Reply::Updated
            }
            Command::SetWork(hours) => {
                self.store.set_daily_work_hours(hours);
                Reply::Updated
            }
            Command::SetCommute(hours) => {
                self.store.set_daily_commute_hours(hours);
                Reply::Updated
            }
            Command::SetHolidays(days) => {
                self.store.set_holiday_days_per_year(days);
                Reply::Updated
            }
            Command::SetShowPercent(show) => {
                self.store.set_show_percent(show);
                Reply::Updated
            }
            Command::Show => Reply::Output(self.render_text()),
            Command::Json => Reply::Output(self.render_json()?),
            Command::Help => Reply::Output(HELP.to_string()),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    /// Parse and apply one input line. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>, WidgetError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        debug!(?command, "widget command");
        Ok(Some(self.apply(command)?))
    }

    /// Run an interactive session until `quit` or end of input.
    ///
    /// Every mutation re-renders the text frame. Bad lines are reported
    /// on `output` and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{}", self.render_text())?;

        let mut line = String::with_capacity(128);
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            match self.handle_line(&line) {
                Ok(None) => {}
                Ok(Some(Reply::Output(text))) => writeln!(output, "{text}")?,
                Ok(Some(Reply::Updated)) => writeln!(output, "{}", self.render_text())?,
                Ok(Some(Reply::Quit)) => return Ok(()),
                Err(e) => {
                    warn!(error = %e, "rejected widget input");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
    }
}

/// Failure to handle one input line.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use crate::types::Horizon;

    fn widget() -> Widget {
        Widget::new(Parameters::default(), DisplayConfig::default())
    }

    #[test]
    fn test_setter_commands_reach_the_store() {
        let mut w = widget();
        assert_eq!(w.handle_line("sleep 9").ok().flatten(), Some(Reply::Updated));
        assert_eq!(w.handle_line("holidays 30").ok().flatten(), Some(Reply::Updated));
        assert_eq!(w.params().daily_sleep_hours, 9.0);
        assert_eq!(w.params().holiday_hours_per_year, 720.0);
    }

    #[test]
    fn test_breakdown_reflects_latest_edit() {
        let mut w = widget();
        w.handle_line("minutes 60").expect("valid command");
        let b = w.breakdown();
        let day = b.horizon(Horizon::Day).expect("day present");
        assert_eq!(day.activity_duration, "1 hr");
        assert_eq!(day.segment(Category::Activity).map(|s| s.hours), Some(1.0));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut w = widget();
        assert!(matches!(w.handle_line("   "), Ok(None)));
    }

    #[test]
    fn test_bad_line_is_an_error() {
        let mut w = widget();
        assert!(matches!(w.handle_line("sleep lots"), Err(WidgetError::Command(_))));
    }

    #[test]
    fn test_json_reply() {
        let mut w = widget();
        match w.handle_line("json") {
            Ok(Some(Reply::Output(json))) => {
                let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
                assert_eq!(value["activity_label"], "Mobile usage");
                assert_eq!(value["horizons"].as_array().map(Vec::len), Some(6));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_run_session() {
        let mut w = widget();
        let input = b"label Reading\npercent off\nbogus\nquit\nsleep 12\n";
        let mut output = Vec::new();
        w.run(&input[..], &mut output).expect("session runs");

        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("Time each day spent on: Reading"));
        assert!(text.contains("error: Unknown command 'bogus'"));
        assert!(text.contains("Sleep 7.5h"));
        // Nothing after quit is applied
        assert_eq!(w.params().daily_sleep_hours, 7.5);
        assert!(!w.params().show_percent);
    }
}
