//! pt-BR display helpers for table cells and badges.
//!
//! Numbers follow the Brazilian convention: `.` groups thousands and `,`
//! separates decimals ("1.234,50"). All amounts are [`Decimal`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Default cut-off for [`truncate`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 50;

/// Default fraction digits for [`format_number`].
pub const DEFAULT_DECIMALS: u32 = 2;

const FILE_SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Cut `text` to `max_length` characters and append `"..."`.
///
/// Absent input yields `""`; text that already fits is returned as is.
/// The cut is a hard character cut with no word-boundary awareness.
///
/// ```
/// use opme::truncate;
/// assert_eq!(truncate("abcde", 5), "abcde");
/// assert_eq!(truncate("abcdef", 5), "abcde...");
/// ```
pub fn truncate<'a>(text: impl Into<Option<&'a str>>, max_length: usize) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };
    match text.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render a number with pt-BR grouping and exactly `decimals` fraction digits.
///
/// `None` renders as `"0"` regardless of `decimals`. Midpoints round away
/// from zero; a value that rounds to zero is shown without a sign.
///
/// ```
/// use opme::format_number;
/// use rust_decimal_macros::dec;
/// assert_eq!(format_number(dec!(1234.5), 2), "1.234,50");
/// assert_eq!(format_number(None, 2), "0");
/// ```
pub fn format_number(value: impl Into<Option<Decimal>>, decimals: u32) -> String {
    match value.into() {
        Some(value) => localize(value, decimals),
        None => "0".into(),
    }
}

/// Render an amount in reais, e.g. `"R$ 1.234,50"`.
///
/// `None` renders as `"R$ 0,00"`; negatives as `"-R$ 10,00"`.
pub fn format_currency(value: impl Into<Option<Decimal>>) -> String {
    let value = value.into().unwrap_or_default();
    let amount = localize(value.abs(), 2);
    if value.is_sign_negative() && amount != "0,00" {
        format!("-R$ {amount}")
    } else {
        format!("R$ {amount}")
    }
}

/// Human-readable file size using 1024-based units up to GB.
///
/// At most two decimals, trailing zeros dropped: `1536 → "1.5 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".into();
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    let fixed = format!("{size:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", FILE_SIZE_UNITS[unit])
}

/// `"1 nota"`, `"0 notas"`, `"12 notas"`.
pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// First eight characters of a 44-digit NF-e access key, then `"..."`.
pub fn access_key_preview(key: &str) -> String {
    let head: String = key.chars().take(8).collect();
    format!("{head}...")
}

fn localize(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    // `{:.N}` on Decimal overflows a fixed buffer for wide values; pad by hand.
    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let width = decimals as usize;

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + width + 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    group_thousands(&mut out, int_part);
    if width > 0 {
        out.push(',');
        out.push_str(frac_part);
        for _ in frac_part.len()..width {
            out.push('0');
        }
    }
    out
}

fn group_thousands(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
}
