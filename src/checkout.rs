//! Tender validation and change computation

use crate::error::{TillError, TillResult};
use crate::money;

/// Outcome of a successful payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub total: u64,
    pub tendered: u64,
    pub change: u64,
}

/// Validate tendered cash against the cart total.
///
/// Does not clear the cart; starting a new transaction is a separate,
/// explicit step.
pub fn tender(total: u64, cash_text: &str) -> TillResult<Receipt> {
    if total == 0 {
        return Err(TillError::EmptyCart);
    }
    let tendered = money::parse_amount(cash_text)
        .ok_or_else(|| TillError::InvalidCash(cash_text.trim().to_string()))?;
    if tendered < 0 || (tendered as u64) < total {
        return Err(TillError::InsufficientPayment { total, tendered });
    }
    let tendered = tendered as u64;
    Ok(Receipt {
        total,
        tendered,
        change: tendered - total,
    })
}
