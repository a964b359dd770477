use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Overrides the reference date when `--as-of` is not given.
pub(crate) const AS_OF_ENV: &str = "EXPENSE_TRACKER_AS_OF";
/// `tracing` filter directives, e.g. `expense_tracker=debug`.
pub(crate) const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

/// Flags that take a value, so the word after them is never a subcommand.
const VALUE_FLAGS: &[&str] = &["--as-of", "--load", "--log", "--search", "--category"];
/// Flags that act as a subcommand of their own.
const COMMAND_FLAGS: &[&str] = &["--help", "-h", "--version", "-V"];

/// Where the reference date came from. Parsed only when a command needs it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AsOf {
    Flag(String),
    Env(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Config {
    /// Date that decides "this month" and "last month". Today when unset.
    pub(crate) as_of: Option<AsOf>,
    /// JSON file to seed the session with.
    pub(crate) load: Option<PathBuf>,
    /// Seed the session with the starter records.
    pub(crate) demo: bool,
    /// Write logs here instead of stderr.
    pub(crate) log_file: Option<PathBuf>,
}

impl Config {
    pub(crate) fn from_args(args: &[String]) -> Self {
        Self::resolve(args, std::env::var(AS_OF_ENV).ok())
    }

    /// Flags win over the environment; a blank env value counts as unset.
    pub(crate) fn resolve(args: &[String], env_as_of: Option<String>) -> Self {
        let as_of = match flag_value(args, "--as-of") {
            Some(raw) => Some(AsOf::Flag(raw.to_string())),
            None => env_as_of
                .filter(|s| !s.trim().is_empty())
                .map(AsOf::Env),
        };

        Self {
            as_of,
            load: flag_value(args, "--load").map(PathBuf::from),
            demo: has_flag(args, "--demo"),
            log_file: flag_value(args, "--log").map(PathBuf::from),
        }
    }

    pub(crate) fn reference_date(&self) -> Result<NaiveDate> {
        match &self.as_of {
            Some(AsOf::Flag(raw)) => parse_date(raw).context("Invalid --as-of date"),
            Some(AsOf::Env(raw)) => parse_date(raw).with_context(|| format!("Invalid {AS_OF_ENV}")),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// Move the subcommand right after the program name, with any global flags
/// that preceded it appended at the end. `None` when there is no subcommand.
///
/// `expense-tracker --as-of 2024-06-01 summary f.json` becomes
/// `expense-tracker summary f.json --as-of 2024-06-01`.
pub(crate) fn command_args(args: &[String]) -> Option<Vec<String>> {
    let mut i = 1;
    while let Some(arg) = args.get(i).map(String::as_str) {
        if COMMAND_FLAGS.contains(&arg) || !arg.starts_with('-') {
            break;
        }
        i += if VALUE_FLAGS.contains(&arg) { 2 } else { 1 };
    }

    let command = args.get(i)?;
    let mut out = Vec::with_capacity(args.len());
    out.extend(args.first().cloned());
    out.push(command.clone());
    out.extend_from_slice(&args[i + 1..]);
    out.extend_from_slice(&args[1..i]);
    Some(out)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Expected YYYY-MM-DD, got '{raw}'"))
}

/// Value following `flag`, e.g. `--month 2024-01`.
pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

pub(crate) fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
