use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::filter::CategoryFilter;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title(app), theme::title_style()));

    if app.visible.is_empty() {
        let msg = if !app.search_input.is_empty() || app.category_filter != CategoryFilter::All {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No expenses match the current filters",
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the search, or :clear to reset filters",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No expenses yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a to add one, or :add 4.50 | Coffee | Food & Dining",
                    theme::dim_style(),
                )),
            ]
        };
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .visible
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let (category_style, amount_style) = if i == app.expense_index {
                (style, style)
            } else {
                (
                    theme::category_style(&expense.category),
                    theme::expense_style(),
                )
            };

            Row::new(vec![
                Cell::from(format!("  {}", expense.date)),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(Span::styled(
                    truncate(&expense.category, 18),
                    category_style,
                )),
                Cell::from(
                    Line::from(Span::styled(format_amount(expense.amount), amount_style))
                        .right_aligned(),
                ),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(20),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn title(app: &App) -> String {
    let mut title = format!(" Expenses ({}) ", app.visible.len());
    if let CategoryFilter::Only(label) = &app.category_filter {
        title.push_str(&format!("[{label}] "));
    }
    if !app.search_input.is_empty() {
        title.push_str(&format!("search: '{}' ", app.search_input));
    }
    title
}
