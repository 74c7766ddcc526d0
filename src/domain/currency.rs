//! Rupiah formatting for display and for the amount input box.

const SYMBOL: &str = "Rp";
/// Intl formats `id-ID` currency with a no-break space after the symbol.
const SEPARATOR: char = '\u{a0}';
const GROUP: char = '.';

/// Formats an amount as `Rp 50.000`: dot grouping, no fraction digits.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP);
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}{}", sign, SYMBOL, SEPARATOR, grouped)
}

/// Reads an amount back out of whatever the payer typed.
///
/// Every character that is not an ASCII digit is dropped; nothing left means
/// zero. Values past `i64::MAX` saturate instead of failing.
pub fn parse_currency(value: &str) -> i64 {
    value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d))
        })
}
