use ratatui::style::{Color, Modifier, Style};

use crate::models::{CategoryKey, ExpenseCategory};

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const MAUVE: Color = Color::Rgb(203, 166, 247);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

/// Badge colour per category. Unknown labels get the neutral overlay grey.
pub(crate) fn category_color(key: CategoryKey) -> Color {
    match key {
        CategoryKey::Known(category) => match category {
            ExpenseCategory::FoodAndDining => Color::Rgb(250, 179, 135),
            ExpenseCategory::Transportation => Color::Rgb(137, 180, 250),
            ExpenseCategory::Shopping => Color::Rgb(245, 194, 231),
            ExpenseCategory::Entertainment => MAUVE,
            ExpenseCategory::BillsAndUtilities => RED,
            ExpenseCategory::Healthcare => GREEN,
            ExpenseCategory::Education => Color::Rgb(180, 190, 254),
            ExpenseCategory::Travel => Color::Rgb(137, 220, 235),
            ExpenseCategory::Housing => YELLOW,
            ExpenseCategory::Insurance => Color::Rgb(166, 173, 200),
            ExpenseCategory::Investments => Color::Rgb(148, 226, 213),
            ExpenseCategory::Other => Color::Rgb(147, 153, 178),
        },
        CategoryKey::Uncategorized => OVERLAY,
    }
}

pub(crate) fn category_style(label: &str) -> Style {
    Style::default().fg(category_color(CategoryKey::from_label(label)))
}
