//! Display formatting for product fields.

/// Marker appended to truncated text.
const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_chars` characters, ending in `...` when cut.
///
/// Counts characters, not bytes, so multi-byte titles never split mid-character.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Format a price as US dollars, e.g. `1234.5` -> `$1,234.50`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}$∞");
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;
    format!("{sign}${}.{frac:02}", group_thousands(whole))
}

/// Format a rating rate with one decimal place.
pub fn format_rating(rate: f64) -> String {
    format!("{rate:.1}")
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
