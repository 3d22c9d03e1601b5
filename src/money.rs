//! Amount parsing and display formatting
//!
//! Amounts are whole numbers in the smallest currency unit. Operator
//! input may carry grouping dots or commas ("15.000"), which are
//! stripped before parsing.

/// Parse an operator-entered amount, stripping grouping punctuation.
///
/// Returns `None` for anything that is not a plain integer once dots
/// and commas are removed. Range checks (non-negative price, positive
/// quantity) are the caller's concern.
pub fn parse_amount(text: &str) -> Option<i64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Format an amount with dot-grouped thousands, e.g. `Rp 15.000`.
pub fn format_amount(prefix: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{} {}", prefix, grouped)
}
