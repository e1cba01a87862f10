//! Text commands understood by the interactive widget
//!
//! One command per line, `<verb> [value]`. Values arrive as raw text, the
//! way a slider or text box hands them over, and are parsed here.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingValue(&'static str),

    #[error("Cannot read '{value}' as {expected} for '{command}'")]
    InvalidValue {
        command: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// A parsed widget command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetLabel(String),
    SetMinutes(f64),
    SetSleep(f64),
    SetWork(f64),
    SetCommute(f64),
    SetHolidays(u32),
    SetShowPercent(bool),
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  label <text>        name of the tracked activity
  minutes <n>         minutes per day on the activity (0-420)
  sleep <hours>       daily sleep hours (4-14)
  work <hours>        daily work hours (4-14)
  commute <hours>     daily commute hours (0-6)
  holidays <days>     yearly holiday days (7-60)
  percent on|off      show percentages or hours
  show                render the widget
  json                print the breakdown as JSON
  help                this text
  quit                leave";

fn number(command: &'static str, raw: Option<&str>) -> Result<f64, CommandError> {
    let raw = raw.ok_or(CommandError::MissingValue(command))?;
    raw.parse::<f64>().map_err(|_| CommandError::InvalidValue {
        command,
        value: raw.to_string(),
        expected: "a number",
    })
}

fn whole_number(command: &'static str, raw: Option<&str>) -> Result<u32, CommandError> {
    let raw = raw.ok_or(CommandError::MissingValue(command))?;
    raw.parse::<u32>().map_err(|_| CommandError::InvalidValue {
        command,
        value: raw.to_string(),
        expected: "a whole number of days",
    })
}

fn switch(command: &'static str, raw: Option<&str>) -> Result<bool, CommandError> {
    let raw = raw.ok_or(CommandError::MissingValue(command))?;
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidValue {
            command,
            value: raw.to_string(),
            expected: "on or off",
        }),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim()).filter(|r| !r.is_empty())),
            None => (line, None),
        };

        match verb.to_ascii_lowercase().as_str() {
            "label" => rest
                .map(|r| Command::SetLabel(r.to_string()))
                .ok_or(CommandError::MissingValue("label")),
            "minutes" => number("minutes", rest).map(Command::SetMinutes),
            "sleep" => number("sleep", rest).map(Command::SetSleep),
            "work" => number("work", rest).map(Command::SetWork),
            "commute" => number("commute", rest).map(Command::SetCommute),
            "holidays" => whole_number("holidays", rest).map(Command::SetHolidays),
            "percent" => switch("percent", rest).map(Command::SetShowPercent),
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setters() {
        assert_eq!("sleep 8".parse::<Command>(), Ok(Command::SetSleep(8.0)));
        assert_eq!("work 9.5".parse::<Command>(), Ok(Command::SetWork(9.5)));
        assert_eq!("commute 0".parse::<Command>(), Ok(Command::SetCommute(0.0)));
        assert_eq!("minutes 120".parse::<Command>(), Ok(Command::SetMinutes(120.0)));
        assert_eq!("holidays 30".parse::<Command>(), Ok(Command::SetHolidays(30)));
    }

    #[test]
    fn test_label_keeps_spaces() {
        assert_eq!(
            "label  Video games ".parse::<Command>(),
            Ok(Command::SetLabel("Video games".to_string()))
        );
    }

    #[test]
    fn test_percent_switch() {
        assert_eq!("percent off".parse::<Command>(), Ok(Command::SetShowPercent(false)));
        assert_eq!("PERCENT On".parse::<Command>(), Ok(Command::SetShowPercent(true)));
        assert!(matches!(
            "percent maybe".parse::<Command>(),
            Err(CommandError::InvalidValue { command: "percent", .. })
        ));
    }

    #[test]
    fn test_missing_and_invalid_values() {
        assert_eq!("sleep".parse::<Command>(), Err(CommandError::MissingValue("sleep")));
        assert_eq!("label".parse::<Command>(), Err(CommandError::MissingValue("label")));
        assert!(matches!(
            "holidays 2.5".parse::<Command>(),
            Err(CommandError::InvalidValue { command: "holidays", .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = "dance 3".parse::<Command>().expect_err("unknown verb");
        assert_eq!(err, CommandError::Unknown("dance".to_string()));
        assert!(err.to_string().contains("help"));
    }

    #[test]
    fn test_bare_verbs() {
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("json".parse::<Command>(), Ok(Command::Json));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }
}
