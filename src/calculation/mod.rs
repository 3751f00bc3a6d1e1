//! Calculation logic for the Roster Engine.
//!
//! This module contains the pay calculation for hourly and salaried
//! employees and the vacation balance check used by time off and holiday
//! payouts.

mod pay;
mod vacation;

pub use pay::{calculate_pay, hourly_amount};
pub use vacation::{DEFAULT_TIME_OFF_DAYS, FIXED_PAYOUT_DAYS, deduct_vacation_days};
