//! Configuration types for seeding a roster.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML roster file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{
    Compensation, DEFAULT_HOURLY_RATE, DEFAULT_HOURS_WORKED, DEFAULT_MONTHLY_SALARY,
    DEFAULT_VACATION_DAYS, Employee, Role,
};

/// Values applied to employee entries that leave a field unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmployeeDefaults {
    /// Starting vacation balance.
    pub vacation_days: u32,
    /// Hourly rate for hourly employees.
    pub hourly_rate: Decimal,
    /// Hours worked for hourly employees.
    pub hours_worked: u32,
    /// Monthly salary for salaried employees.
    pub monthly_salary: Decimal,
}

impl Default for EmployeeDefaults {
    fn default() -> Self {
        Self {
            vacation_days: DEFAULT_VACATION_DAYS,
            hourly_rate: DEFAULT_HOURLY_RATE,
            hours_worked: DEFAULT_HOURS_WORKED,
            monthly_salary: DEFAULT_MONTHLY_SALARY,
        }
    }
}

/// Pay settings for one configured employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayEntry {
    /// An hourly employee; unset fields fall back to the defaults.
    Hourly {
        /// Override for the hourly rate.
        hourly_rate: Option<Decimal>,
        /// Override for the hours worked.
        hours_worked: Option<u32>,
    },
    /// A salaried employee; an unset salary falls back to the default.
    Salaried {
        /// Override for the monthly salary.
        monthly_salary: Option<Decimal>,
    },
}

/// One employee listed in the roster file.
///
/// Unknown keys are rejected, as are pay keys that do not belong to the
/// entry's `pay_type` (for example `monthly_salary` on an hourly entry).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEmployeeEntry")]
pub struct EmployeeEntry {
    /// Display name.
    pub name: String,
    /// Role held.
    pub role: Role,
    /// Override for the starting vacation balance.
    pub vacation_days: Option<u32>,
    /// Pay settings.
    pub pay: PayEntry,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PayType {
    Hourly,
    Salaried,
}

/// Employee entry as written in YAML, before pay keys are checked against
/// the pay type.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEmployeeEntry {
    name: String,
    role: Role,
    pay_type: PayType,
    #[serde(default)]
    vacation_days: Option<u32>,
    #[serde(default)]
    hourly_rate: Option<Decimal>,
    #[serde(default)]
    hours_worked: Option<u32>,
    #[serde(default)]
    monthly_salary: Option<Decimal>,
}

impl TryFrom<RawEmployeeEntry> for EmployeeEntry {
    type Error = String;

    fn try_from(raw: RawEmployeeEntry) -> Result<Self, Self::Error> {
        let pay = match raw.pay_type {
            PayType::Hourly => {
                if raw.monthly_salary.is_some() {
                    return Err(format!(
                        "employee '{}': `monthly_salary` is not allowed for pay_type `hourly`",
                        raw.name
                    ));
                }
                PayEntry::Hourly {
                    hourly_rate: raw.hourly_rate,
                    hours_worked: raw.hours_worked,
                }
            }
            PayType::Salaried => {
                if let Some(key) = [
                    ("hourly_rate", raw.hourly_rate.is_some()),
                    ("hours_worked", raw.hours_worked.is_some()),
                ]
                .into_iter()
                .find_map(|(key, present)| present.then_some(key))
                {
                    return Err(format!(
                        "employee '{}': `{}` is not allowed for pay_type `salaried`",
                        raw.name, key
                    ));
                }
                PayEntry::Salaried {
                    monthly_salary: raw.monthly_salary,
                }
            }
        };

        Ok(Self {
            name: raw.name,
            role: raw.role,
            vacation_days: raw.vacation_days,
            pay,
        })
    }
}

impl EmployeeEntry {
    /// Builds an employee, filling unset fields from `defaults`.
    pub fn to_employee(&self, defaults: &EmployeeDefaults) -> Employee {
        let compensation = match &self.pay {
            PayEntry::Hourly {
                hourly_rate,
                hours_worked,
            } => Compensation::Hourly {
                hourly_rate: hourly_rate.unwrap_or(defaults.hourly_rate),
                hours_worked: hours_worked.unwrap_or(defaults.hours_worked),
            },
            PayEntry::Salaried { monthly_salary } => Compensation::Salaried {
                monthly_salary: monthly_salary.unwrap_or(defaults.monthly_salary),
            },
        };

        Employee::new(self.name.clone(), self.role, compensation)
            .with_vacation_days(self.vacation_days.unwrap_or(defaults.vacation_days))
    }
}

/// The complete roster configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// Defaults applied to every entry.
    #[serde(default)]
    pub defaults: EmployeeDefaults,
    /// Employees in roster order.
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
}
