//! Currency display formatting.
//!
//! Amounts are stored as integer cents. Display strings use the en-US
//! convention: `$` prefix, `,` thousands separator, two decimals, and a
//! leading `-` for negative amounts.

/// Format an amount in cents as a US dollar display string.
///
/// ```
/// use dashctl_core::format_currency;
///
/// assert_eq!(format_currency(1234), "$12.34");
/// assert_eq!(format_currency(123_456_789), "$1,234,567.89");
/// assert_eq!(format_currency(-5), "-$0.05");
/// ```
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let remainder = abs % 100;

    format!("{sign}${}.{remainder:02}", group_thousands(dollars))
}

/// Convert cents to display units (dollars).
pub fn cents_to_units(cents: i64) -> f64 {
    cents as f64 / 100.0
}

fn group_thousands(value: u64) -> String {
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
