#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Coffee", 10), "Coffee");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Coffee", 6), "Coffee");
}

#[test]
fn test_truncate_long_description() {
    assert_eq!(truncate("Monthly rent payment", 8), "Monthly…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Coffee", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café crème", 5), "café…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("Coffee", 1), "…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1270.50)), "$1,270.50");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(Decimal::ZERO), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(25.5)), "$25.50");
    assert_eq!(format_amount(dec!(1200)), "$1,200.00");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(dec!(10000000.00)), "$10,000,000.00");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent_positive() {
    assert_eq!(format_percent(dec!(100)), "+100.0%");
}

#[test]
fn test_format_percent_zero_has_plus() {
    assert_eq!(format_percent(Decimal::ZERO), "+0.0%");
}

#[test]
fn test_format_percent_negative() {
    assert_eq!(format_percent(dec!(-75)), "-75.0%");
}

#[test]
fn test_format_percent_rounds() {
    assert_eq!(format_percent(dec!(33.3333)), "+33.3%");
    assert_eq!(format_percent(dec!(12.46)), "+12.5%");
}

// ── parse_amount_input ────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount_input("4.50").unwrap(), Some(dec!(4.50)));
}

#[test]
fn test_parse_amount_with_currency() {
    assert_eq!(parse_amount_input("$1,234.56").unwrap(), Some(dec!(1234.56)));
}

#[test]
fn test_parse_amount_blank_is_none() {
    assert_eq!(parse_amount_input("").unwrap(), None);
    assert_eq!(parse_amount_input("   ").unwrap(), None);
}

#[test]
fn test_parse_amount_invalid() {
    let err = parse_amount_input("abc").unwrap_err();
    assert_eq!(err.to_string(), "Invalid amount: abc");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 2);
    scroll_down(&mut index, &mut scroll, 5, 3);
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_moves_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}
