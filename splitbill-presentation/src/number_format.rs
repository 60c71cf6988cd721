use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Formats an amount for display: two decimals at most, thousands separators,
/// trailing zeros dropped.
pub fn format_number(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0".to_string();
    }

    let digits = rounded.abs().normalize().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() {
        formatted.push('-');
    }
    let len = integer.len();
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

/// Like [`format_number`], but for raw text. Non-numeric input is shown as-is.
pub fn format_display(raw: &str) -> String {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(format_number)
        .unwrap_or_else(|_| raw.to_string())
}
