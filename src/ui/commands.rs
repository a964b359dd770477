use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Local, Months};

use super::app::{App, InputMode, PendingAction, Screen};
use crate::config::parse_date;
use crate::filter::{CategoryFilter, ALL_CATEGORIES};
use crate::models::{ExpenseCategory, ExpenseDraft};
use crate::ui::util::parse_amount_input;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 4.50 | Coffee | Food & Dining [| 2024-06-20])",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add expense (e.g. :a 4.50 | Coffee | Food & Dining)",
        cmd_add,
        r
    );
    register_command!(
        "search",
        "Search expenses (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search expenses (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "filter-category",
        "Filter by category (e.g. :filter-category Housing, or all)",
        cmd_filter_category,
        r
    );
    register_command!(
        "fc",
        "Filter by category (e.g. :fc Housing, or all)",
        cmd_filter_category,
        r
    );
    register_command!("clear", "Clear search and category filter", cmd_clear, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!(
        "as-of",
        "Set reference date (e.g. :as-of 2024-06-20)",
        cmd_as_of,
        r
    );
    register_command!("today", "Reset reference date to today", cmd_today, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!("categories", "List expense categories", cmd_categories, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh();
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.refresh();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form();
        return Ok(());
    }

    let parts: Vec<&str> = args.split('|').map(str::trim).collect();
    if parts.len() < 3 {
        app.set_status("Usage: :add <amount> | <description> | <category> [| <date>]");
        return Ok(());
    }

    let amount = match parse_amount_input(parts[0]) {
        Ok(amount) => amount,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    // Typed labels are matched leniently, then stored in canonical form.
    let category = ExpenseCategory::parse(parts[2])
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|| parts[2].to_string());

    let date = match parts.get(3) {
        Some(raw) => match parse_date(raw) {
            Ok(date) => date,
            Err(e) => {
                app.set_status(e.to_string());
                return Ok(());
            }
        },
        None => app.as_of,
    };

    let draft = ExpenseDraft {
        amount,
        description: parts[1].to_string(),
        category,
        date: date.format("%Y-%m-%d").to_string(),
    };

    let description = parts[1].to_string();
    match app.add_expense(draft) {
        Ok(()) => app.set_status(format!("Added: {description}")),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.set_search(args);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_filter_category(args: &str, app: &mut App) -> anyhow::Result<()> {
    let filter = if args.is_empty() || args.eq_ignore_ascii_case(ALL_CATEGORIES) {
        CategoryFilter::All
    } else {
        match ExpenseCategory::parse(args) {
            Some(category) => CategoryFilter::Only(category.as_str().to_string()),
            None => CategoryFilter::Only(args.to_string()),
        }
    };

    app.screen = Screen::Expenses;
    app.set_status(format!("Category: {filter}"));
    app.set_category_filter(filter);
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.search_input.clear();
    app.set_category_filter(CategoryFilter::All);
    app.set_status("Filters cleared");
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.screen != Screen::Expenses || app.visible.is_empty() {
        app.set_status("Navigate to Expenses and select one first");
        return Ok(());
    }

    if let Some(expense) = app.selected_expense() {
        let id = expense.id.clone();
        let description = expense.description.clone();
        app.confirm_message = format!("Delete '{description}'?");
        app.pending_action = Some(PendingAction::DeleteExpense { id, description });
        app.input_mode = InputMode::Confirm;
    }

    Ok(())
}

fn cmd_as_of(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Reference date: {}. Usage: :as-of YYYY-MM-DD",
            app.as_of
        ));
        return Ok(());
    }

    match parse_date(args) {
        Ok(date) => {
            app.set_as_of(date);
            app.set_status(format!("Reference date: {date}"));
        }
        Err(_) => app.set_status("Invalid date format. Use YYYY-MM-DD (e.g. 2024-06-20)"),
    }
    Ok(())
}

fn cmd_today(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    app.set_as_of(today);
    app.set_status(format!("Reference date: {today}"));
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App) -> anyhow::Result<()> {
    advance_month(app, 1);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App) -> anyhow::Result<()> {
    advance_month(app, -1);
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let names: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.as_str()).collect();
    app.set_status(format!("Categories: {}", names.join(", ")));
    Ok(())
}

pub(crate) fn advance_month(app: &mut App, delta: i32) {
    let next = if delta > 0 {
        app.as_of.checked_add_months(Months::new(1))
    } else {
        app.as_of.checked_sub_months(Months::new(1))
    };

    if let Some(date) = next {
        app.set_as_of(date);
        app.set_status(format!("Month: {}", app.current_month()));
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
