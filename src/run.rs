mod cli;
mod tui;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::config::Config;
use crate::import::{sample_records, JsonImporter};
use crate::models::ExpenseRecord;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

/// Starting collection for a session: the `--load` file, then the demo
/// records (dated around `today`) when `--demo` is set, otherwise empty.
pub(crate) fn initial_records(config: &Config, today: NaiveDate) -> Result<Vec<ExpenseRecord>> {
    let mut records = match &config.load {
        Some(path) => JsonImporter::load(path)?,
        None => Vec::new(),
    };
    if config.demo {
        // Loaded ids win; demo ids are short and may collide.
        let demo: Vec<ExpenseRecord> = sample_records(today)
            .into_iter()
            .filter(|d| records.iter().all(|r| r.id != d.id))
            .collect();
        records.extend(demo);
    }
    info!(count = records.len(), "session started");
    Ok(records)
}
