//! Amount validation shared by purchase, sale and redemption.
//!
//! ## Constraints
//! - **Positive**: every unit amount must be strictly greater than zero.
//! - **Per-call ceiling**: purchases and sales move at most
//!   [`MAX_UNITS_PER_CALL`] units in a single invocation. The bound is an
//!   anti-abuse limit and carries no business meaning.

use crate::errors::LedgerError;

/// Largest unit amount a single purchase or sale may move.
pub const MAX_UNITS_PER_CALL: i128 = 10_000;

/// # Errors
/// * `InvalidAmount` if `amount <= 0`
pub fn require_positive(amount: i128) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// # Errors
/// * `AmountExceedsLimit` if `amount > MAX_UNITS_PER_CALL`
pub fn require_within_call_limit(amount: i128) -> Result<(), LedgerError> {
    if amount > MAX_UNITS_PER_CALL {
        return Err(LedgerError::AmountExceedsLimit);
    }
    Ok(())
}

/// Issuance parameters may be zero but never negative.
pub fn require_non_negative(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}
