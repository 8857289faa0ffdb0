/// Formats an amount with two decimals and comma thousands separators,
/// prefixed with the currency symbol: `₹1,234,567.50`.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

/// `1 month`, `11 months`. `text` is printed as the user wrote it; `months`
/// is its parsed value and only picks the unit's plural.
pub fn format_months(text: &str, months: u32) -> String {
    let unit = if months == 1 { "month" } else { "months" };
    format!("{} {}", text, unit)
}
