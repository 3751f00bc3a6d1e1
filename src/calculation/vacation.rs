//! Vacation balance bookkeeping.
//!
//! This module provides the balance check shared by time off and holiday
//! payouts.

use crate::error::{RosterError, RosterResult};

/// Number of days deducted by a holiday payout.
pub const FIXED_PAYOUT_DAYS: u32 = 5;

/// Number of days taken off when no count is given.
pub const DEFAULT_TIME_OFF_DAYS: u32 = 1;

/// Deducts `requested` days from `balance` and returns the new balance.
///
/// # Errors
///
/// - [`RosterError::InvalidDayCount`] if `requested` is zero.
/// - [`RosterError::VacationShortage`] if `requested` exceeds `balance`.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::deduct_vacation_days;
/// use roster_engine::error::RosterError;
///
/// assert_eq!(deduct_vacation_days(25, 4), Ok(21));
/// assert_eq!(
///     deduct_vacation_days(20, 25),
///     Err(RosterError::VacationShortage { requested: 25, remaining: 20 })
/// );
/// ```
pub fn deduct_vacation_days(balance: u32, requested: u32) -> RosterResult<u32> {
    if requested == 0 {
        return Err(RosterError::InvalidDayCount { days: requested });
    }

    balance
        .checked_sub(requested)
        .ok_or(RosterError::VacationShortage {
            requested,
            remaining: balance,
        })
}
