//! Pay calculation functionality.
//!
//! This module determines the amount due to an employee from their
//! compensation variant.

use rust_decimal::Decimal;

use crate::error::{RosterError, RosterResult};
use crate::models::{Compensation, Employee, Payment};

/// Multiplies an hourly rate by hours worked, or `None` if the product does
/// not fit in a [`Decimal`].
pub fn hourly_amount(hourly_rate: Decimal, hours_worked: u32) -> Option<Decimal> {
    hourly_rate.checked_mul(Decimal::from(hours_worked))
}

/// Calculates the payment due to an employee.
///
/// - Hourly employees are paid `hourly_rate * hours_worked`.
/// - Salaried employees are paid their flat `monthly_salary`.
///
/// The calculation is pure: calling it repeatedly yields the same result and
/// leaves the employee untouched.
///
/// # Errors
///
/// Returns [`RosterError::CalculationError`] if the hourly product overflows.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::calculate_pay;
/// use roster_engine::models::{Employee, Role};
/// use rust_decimal::Decimal;
///
/// let brenda = Employee::hourly("Brenda", Role::President)
///     .with_hourly_rate(Decimal::new(6250, 2))
///     .with_hours_worked(8);
/// assert_eq!(calculate_pay(&brenda)?.amount, Decimal::from(500));
/// # Ok::<(), roster_engine::error::RosterError>(())
/// ```
pub fn calculate_pay(employee: &Employee) -> RosterResult<Payment> {
    let (amount, reasoning) = match &employee.compensation {
        Compensation::Hourly {
            hourly_rate,
            hours_worked,
        } => {
            let amount = hourly_amount(*hourly_rate, *hours_worked).ok_or_else(|| {
                RosterError::CalculationError {
                    message: format!(
                        "pay for '{}' overflowed: {} hours at ${}",
                        employee.name, hours_worked, hourly_rate
                    ),
                }
            })?;
            (
                amount,
                format!(
                    "{} hours at hourly rate ${} = ${}",
                    hours_worked, hourly_rate, amount
                ),
            )
        }
        Compensation::Salaried { monthly_salary } => (
            *monthly_salary,
            format!("Flat monthly salary of ${}", monthly_salary),
        ),
    };

    Ok(Payment {
        employee_id: employee.id,
        employee_name: employee.name.clone(),
        basis: employee.compensation.clone(),
        amount,
        reasoning,
    })
}
