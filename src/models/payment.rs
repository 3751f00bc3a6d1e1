//! Payment models.
//!
//! This module contains the [`Payment`] produced by paying a single employee
//! and the [`Payroll`] produced by paying an entire roster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RosterError, RosterResult};

use super::Compensation;

/// Describes the payment due to one employee.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, Role};
/// use rust_decimal::Decimal;
///
/// let louis = Employee::salaried("Louis", Role::Manager);
/// let payment = louis.pay()?;
/// assert_eq!(payment.amount, Decimal::from(5000));
/// assert_eq!(payment.employee_name, "Louis");
/// # Ok::<(), roster_engine::error::RosterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// The id of the employee being paid.
    pub employee_id: Uuid,
    /// The name of the employee being paid.
    pub employee_name: String,
    /// The compensation inputs the amount was computed from.
    pub basis: Compensation,
    /// The amount due.
    pub amount: Decimal,
    /// Human-readable explanation of how the amount was reached.
    pub reasoning: String,
}

/// The payments for every employee of a roster, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    /// One payment per employee.
    pub payments: Vec<Payment>,
    /// Sum of all payment amounts.
    pub total: Decimal,
}

impl Payroll {
    /// Builds a payroll from individual payments, summing their amounts.
    ///
    /// Fails with [`RosterError::CalculationError`] if the total overflows.
    pub fn from_payments(payments: Vec<Payment>) -> RosterResult<Self> {
        let total = payments
            .iter()
            .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.amount))
            .ok_or_else(|| RosterError::CalculationError {
                message: format!("payroll total of {} payments overflowed", payments.len()),
            })?;
        Ok(Self { payments, total })
    }
}
