//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and the [`Compensation`] enum
//! that distinguishes hourly from salaried workers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_TIME_OFF_DAYS, FIXED_PAYOUT_DAYS, calculate_pay, deduct_vacation_days, hourly_amount,
};
use crate::error::{RosterError, RosterResult};

use super::{Payment, Role};

/// Vacation balance given to a new employee.
pub const DEFAULT_VACATION_DAYS: u32 = 25;

/// Hourly rate given to a new hourly employee.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Hours worked given to a new hourly employee.
pub const DEFAULT_HOURS_WORKED: u32 = 10;

/// Monthly salary given to a new salaried employee.
pub const DEFAULT_MONTHLY_SALARY: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

fn default_vacation_days() -> u32 {
    DEFAULT_VACATION_DAYS
}

/// How an employee is paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pay_type", rename_all = "snake_case")]
pub enum Compensation {
    /// Paid per hour worked.
    Hourly {
        /// The rate paid per hour.
        hourly_rate: Decimal,
        /// The number of hours worked.
        hours_worked: u32,
    },
    /// Paid a flat monthly salary.
    Salaried {
        /// The salary paid per month.
        monthly_salary: Decimal,
    },
}

/// Represents one person held on a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// The role the employee holds.
    pub role: Role,
    /// Remaining paid days off.
    #[serde(default = "default_vacation_days")]
    pub vacation_days: u32,
    /// How the employee is paid.
    #[serde(flatten)]
    pub compensation: Compensation,
}

impl Employee {
    /// Creates an employee with the given compensation and the default
    /// vacation balance.
    pub fn new(name: impl Into<String>, role: Role, compensation: Compensation) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            vacation_days: DEFAULT_VACATION_DAYS,
            compensation,
        }
    }

    /// Creates an hourly employee with the default rate and hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{Employee, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let tim = Employee::hourly("Tim", Role::Intern);
    /// assert_eq!(tim.vacation_days, 25);
    /// assert_eq!(tim.pay()?.amount, Decimal::from(500));
    /// # Ok::<(), roster_engine::error::RosterError>(())
    /// ```
    pub fn hourly(name: impl Into<String>, role: Role) -> Self {
        Self::new(
            name,
            role,
            Compensation::Hourly {
                hourly_rate: DEFAULT_HOURLY_RATE,
                hours_worked: DEFAULT_HOURS_WORKED,
            },
        )
    }

    /// Creates a salaried employee with the default monthly salary.
    pub fn salaried(name: impl Into<String>, role: Role) -> Self {
        Self::new(
            name,
            role,
            Compensation::Salaried {
                monthly_salary: DEFAULT_MONTHLY_SALARY,
            },
        )
    }

    /// Sets the starting vacation balance.
    pub fn with_vacation_days(mut self, days: u32) -> Self {
        self.vacation_days = days;
        self
    }

    /// Sets the hourly rate. Has no effect on salaried employees.
    pub fn with_hourly_rate(mut self, rate: Decimal) -> Self {
        if let Compensation::Hourly { hourly_rate, .. } = &mut self.compensation {
            *hourly_rate = rate;
        }
        self
    }

    /// Sets the hours worked. Has no effect on salaried employees.
    pub fn with_hours_worked(mut self, hours: u32) -> Self {
        if let Compensation::Hourly { hours_worked, .. } = &mut self.compensation {
            *hours_worked = hours;
        }
        self
    }

    /// Sets the monthly salary. Has no effect on hourly employees.
    pub fn with_monthly_salary(mut self, salary: Decimal) -> Self {
        if let Compensation::Salaried { monthly_salary } = &mut self.compensation {
            *monthly_salary = salary;
        }
        self
    }

    /// Returns true if the employee is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        matches!(self.compensation, Compensation::Hourly { .. })
    }

    /// Checks the record for a blank name, a non-positive rate or salary, or
    /// an hourly rate whose pay for the hours worked would overflow.
    pub fn validate(&self) -> RosterResult<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        match &self.compensation {
            Compensation::Hourly { hourly_rate, .. } if *hourly_rate <= Decimal::ZERO => {
                Err(RosterError::InvalidEmployee {
                    field: "hourly_rate".to_string(),
                    message: format!("must be positive, got {}", hourly_rate),
                })
            }
            Compensation::Hourly {
                hourly_rate,
                hours_worked,
            } if hourly_amount(*hourly_rate, *hours_worked).is_none() => {
                Err(RosterError::InvalidEmployee {
                    field: "hourly_rate".to_string(),
                    message: format!(
                        "{} hours at {} exceeds the largest representable amount",
                        hours_worked, hourly_rate
                    ),
                })
            }
            Compensation::Salaried { monthly_salary } if *monthly_salary <= Decimal::ZERO => {
                Err(RosterError::InvalidEmployee {
                    field: "monthly_salary".to_string(),
                    message: format!("must be positive, got {}", monthly_salary),
                })
            }
            _ => Ok(()),
        }
    }

    /// Computes the payment due. Does not change any state.
    ///
    /// Fails with [`RosterError::CalculationError`] only if the hourly pay
    /// overflows, which [`Employee::validate`] rules out.
    pub fn pay(&self) -> RosterResult<Payment> {
        calculate_pay(self)
    }

    /// Takes a single day off.
    pub fn take_day_off(&mut self) -> RosterResult<u32> {
        self.take_time_off(DEFAULT_TIME_OFF_DAYS)
    }

    /// Takes `days` days of paid time off and returns the remaining balance.
    ///
    /// Fails with [`RosterError::VacationShortage`] if the balance is too
    /// small, or [`RosterError::InvalidDayCount`] if `days` is zero. The
    /// balance is left untouched on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::error::RosterError;
    /// use roster_engine::models::{Employee, Role};
    ///
    /// let mut louis = Employee::salaried("Louis", Role::Manager);
    /// assert_eq!(louis.take_time_off(4), Ok(21));
    /// assert_eq!(
    ///     louis.take_time_off(30),
    ///     Err(RosterError::VacationShortage { requested: 30, remaining: 21 })
    /// );
    /// assert_eq!(louis.vacation_days, 21);
    /// ```
    pub fn take_time_off(&mut self, days: u32) -> RosterResult<u32> {
        let remaining = self.deduct(days)?;
        info!(
            employee_id = %self.id,
            employee = %self.name,
            days,
            remaining,
            "Time off granted"
        );
        Ok(remaining)
    }

    /// Pays out a fixed block of [`FIXED_PAYOUT_DAYS`] vacation days and
    /// returns the remaining balance.
    pub fn payout_holiday(&mut self) -> RosterResult<u32> {
        let remaining = self.deduct(FIXED_PAYOUT_DAYS)?;
        info!(
            employee_id = %self.id,
            employee = %self.name,
            days = FIXED_PAYOUT_DAYS,
            remaining,
            "Holiday paid out"
        );
        Ok(remaining)
    }

    fn deduct(&mut self, days: u32) -> RosterResult<u32> {
        match deduct_vacation_days(self.vacation_days, days) {
            Ok(remaining) => {
                self.vacation_days = remaining;
                Ok(remaining)
            }
            Err(err) => {
                warn!(
                    employee_id = %self.id,
                    employee = %self.name,
                    requested = days,
                    remaining = self.vacation_days,
                    error = %err,
                    "Vacation deduction rejected"
                );
                Err(err)
            }
        }
    }
}
