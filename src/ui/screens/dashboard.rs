use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Chart + quick stats
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(chunks[1]);

    render_category_chart(f, body[0], app);
    render_quick_stats(f, body[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = &app.summary;

    render_card(
        f,
        cards[0],
        "Total Expenses",
        format_amount(summary.total),
        theme::ACCENT,
        format!("{} expenses", summary.record_count),
    );
    render_card(
        f,
        cards[1],
        "This Month",
        format_amount(summary.current_month_total),
        theme::YELLOW,
        format!("Last month {}", format_amount(summary.previous_month_total)),
    );

    // Spending more than last month is bad news
    let change = summary.month_over_month_change_percent;
    render_card(
        f,
        cards[2],
        "Monthly Change",
        format_percent(change),
        if change >= Decimal::ZERO {
            theme::RED
        } else {
            theme::GREEN
        },
        "vs last month".to_string(),
    );

    match &summary.top_category {
        Some(top) => render_card(
            f,
            cards[3],
            "Top Category",
            top.category.to_string(),
            theme::category_color(top.category),
            format_amount(top.total),
        ),
        None => render_card(
            f,
            cards[3],
            "Top Category",
            "None".to_string(),
            theme::TEXT_DIM,
            String::new(),
        ),
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Spending by Category ", theme::title_style()));

    if app.summary.by_category.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", theme::dim_style())),
            Line::from(Span::styled(
                "Press a to add one, or start with --demo",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .summary
        .by_category
        .iter()
        .map(|entry| {
            let color = theme::category_color(entry.category);
            Bar::default()
                .value(entry.total.max(Decimal::ZERO).round().to_u64().unwrap_or(0))
                .text_value(format_amount(entry.total))
                .label(Line::from(truncate(entry.category.as_str(), 12)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_quick_stats(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.summary;
    let stat = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {label:<16}"), theme::dim_style()),
            Span::styled(
                value,
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        Line::from(""),
        stat("Expenses", summary.record_count.to_string()),
        stat("Categories used", summary.category_count.to_string()),
        stat("Month", app.current_month().to_string()),
        stat("Reference date", app.as_of.to_string()),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Quick Stats ", theme::title_style())),
    );
    f.render_widget(panel, area);
}
