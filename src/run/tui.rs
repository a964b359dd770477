use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::ui::app::{App, FormField, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    let as_of = config.reference_date()?;
    let records = super::initial_records(config, as_of)?;
    let mut app = App::new(as_of, records);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Search => handle_search_input(key, app),
                InputMode::Form => handle_form_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.set_search("");
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Expenses),
        KeyCode::Tab | KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = if key.code == KeyCode::Tab {
                (idx + 1) % screens.len()
            } else {
                (idx + screens.len() - 1) % screens.len()
            };
            switch_screen(app, screens[next]);
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('D') if app.screen == Screen::Expenses => {
            commands::handle_command("delete", app)?;
        }
        KeyCode::Char('c') if app.screen == Screen::Expenses => {
            app.cycle_category_filter(1);
            let label = app.category_filter.to_string();
            app.set_status(format!("Category: {label}"));
        }
        KeyCode::Char('C') if app.screen == Screen::Expenses => {
            app.cycle_category_filter(-1);
            let label = app.category_filter.to_string();
            app.set_status(format!("Category: {label}"));
        }
        KeyCode::Char('H') => commands::advance_month(app, -1),
        KeyCode::Char('L') => commands::advance_month(app, 1),
        KeyCode::Char('g') => scroll_to_top(&mut app.expense_index, &mut app.expense_scroll),
        KeyCode::Char('G') => scroll_to_bottom(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.visible.len(),
            app.visible_rows.max(1),
        ),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
            app.set_search("");
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_search("");
        }
        KeyCode::Backspace => {
            // Live search: filter as you type
            let mut term = app.search_input.clone();
            term.pop();
            app.screen = Screen::Expenses;
            app.set_search(term);
        }
        KeyCode::Char(c) => {
            let mut term = app.search_input.clone();
            term.push(c);
            app.screen = Screen::Expenses;
            app.set_search(term);
        }
        _ => {}
    }
}

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_status("Add cancelled");
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.field = app.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.field = app.form.field.prev();
        }
        KeyCode::Left | KeyCode::Char('-') if app.form.field == FormField::Category => {
            app.form.cycle_category(-1);
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char(' ')
            if app.form.field == FormField::Category =>
        {
            app.form.cycle_category(1);
        }
        KeyCode::Backspace => {
            if let Some(text) = app.form.focused_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = app.form.focused_text_mut() {
                text.push(c);
            }
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteExpense { id, description } => {
                        if app.delete_expense(&id) {
                            app.set_status(format!("Deleted: {description}"));
                        } else {
                            app.set_status("Expense no longer exists");
                        }
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.refresh();
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Expenses {
        let page = app.visible_rows.max(1);
        scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.visible.len(),
            page,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Expenses {
        scroll_up(&mut app.expense_index, &mut app.expense_scroll);
    }
}
