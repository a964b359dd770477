use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::Path;

use crate::config::{flag_value, has_flag, Config};
use crate::filter::{filter, CategoryFilter};
use crate::import::JsonImporter;
use crate::models::{ExpenseCategory, ExpenseRecord};
use crate::summary::{summarize, MonthKey, Summary};
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], config),
        "list" | "ls" => cli_list(&args[2..]),
        "categories" => {
            for category in ExpenseCategory::all() {
                println!("{category}");
            }
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expense-tracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("expense-tracker: personal expense summaries in the terminal");
    println!();
    println!("Usage: expense-tracker [global options] [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("    --demo                      Start with sample expenses");
    println!("    --load <file.json>          Start with expenses from a JSON file");
    println!("  summary <file.json>           Print the expense summary");
    println!("    --json                      Print as JSON");
    println!("  list <file.json>              List expenses");
    println!("    --search <term>             Match description or category");
    println!("    --category <label|all>      Only this category");
    println!("  categories                    List expense categories");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Global options (before or after the command):");
    println!("  --as-of <YYYY-MM-DD>          Reference date for monthly totals (default: today)");
    println!("  --log <path>                  Write logs to a file instead of stderr");
}

fn input_file<'a>(args: &'a [String], usage: &str) -> Result<&'a Path> {
    let file_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .with_context(|| format!("Usage: {usage}"))?;
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }
    Ok(path)
}

fn cli_summary(args: &[String], config: &Config) -> Result<()> {
    let path = input_file(
        args,
        "expense-tracker summary <file.json> [--as-of YYYY-MM-DD] [--json]",
    )?;
    let records = JsonImporter::load(path)?;
    let as_of = config.reference_date()?;
    let summary = summarize(&records, &as_of);

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary_text(&summary, as_of));
    }
    Ok(())
}

fn cli_list(args: &[String]) -> Result<()> {
    let path = input_file(
        args,
        "expense-tracker list <file.json> [--search <term>] [--category <label|all>]",
    )?;
    let records = JsonImporter::load(path)?;

    let search = flag_value(args, "--search").unwrap_or("");
    let category = match flag_value(args, "--category") {
        Some(raw) => match ExpenseCategory::parse(raw) {
            Some(known) => CategoryFilter::Only(known.as_str().to_string()),
            None => CategoryFilter::parse(raw),
        },
        None => CategoryFilter::All,
    };

    let visible = filter(&records, search, &category);
    print!("{}", list_text(&visible));
    Ok(())
}

pub(crate) fn summary_text(summary: &Summary, as_of: NaiveDate) -> String {
    let month = MonthKey::of(&as_of);
    let mut out = String::new();

    let _ = writeln!(out, "Expense summary as of {as_of}");
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(
        out,
        "  Total:          {:>14}  ({} expenses, {} categories)",
        format_amount(summary.total),
        summary.record_count,
        summary.category_count
    );
    let _ = writeln!(
        out,
        "  This month:     {:>14}  ({month})",
        format_amount(summary.current_month_total)
    );
    let _ = writeln!(
        out,
        "  Last month:     {:>14}  ({})",
        format_amount(summary.previous_month_total),
        month.previous()
    );
    let _ = writeln!(
        out,
        "  Monthly change: {:>14}",
        format_percent(summary.month_over_month_change_percent)
    );
    match &summary.top_category {
        Some(top) => {
            let _ = writeln!(
                out,
                "  Top category:   {} ({})",
                top.category,
                format_amount(top.total)
            );
        }
        None => {
            let _ = writeln!(out, "  Top category:   None");
        }
    }

    if !summary.by_category.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "By category:");
        for entry in &summary.by_category {
            let _ = writeln!(
                out,
                "  {:<20} {:>14}",
                entry.category.as_str(),
                format_amount(entry.total)
            );
        }
    }
    out
}

pub(crate) fn list_text(records: &[ExpenseRecord]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        let _ = writeln!(out, "No expenses found");
        return out;
    }
    for record in records {
        let _ = writeln!(
            out,
            "{:<10}  {:<32}  {:<18}  {:>12}",
            record.date,
            truncate(&record.description, 32),
            truncate(&record.category, 18),
            format_amount(record.amount)
        );
    }
    let _ = writeln!(out, "{} expenses", records.len());
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
