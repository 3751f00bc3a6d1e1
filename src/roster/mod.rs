//! The roster: an ordered collection of employees.
//!
//! A [`Roster`] owns its employees, keeps them in insertion order, and
//! supports filtered lookup and id-addressed vacation operations.
//!
//! # Example
//!
//! ```
//! use roster_engine::models::{Employee, Role};
//! use roster_engine::roster::{EmployeeQuery, Roster};
//!
//! let mut roster = Roster::new();
//! roster.add_employee(Employee::salaried("Louis", Role::Manager));
//! roster.add_employee(Employee::hourly("Brenda", Role::President));
//! roster.add_employee(Employee::hourly("Tim", Role::Intern));
//!
//! let managers = roster.find_employees(&EmployeeQuery::new().with_role(Role::Manager));
//! assert_eq!(managers.len(), 1);
//! assert_eq!(managers[0].name, "Louis");
//! ```

mod query;

pub use query::EmployeeQuery;

use tracing::debug;
use uuid::Uuid;

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Payment, Payroll};

/// An ordered, append-only collection of employees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee. No uniqueness check is made.
    pub fn add_employee(&mut self, employee: Employee) {
        debug!(
            employee_id = %employee.id,
            employee = %employee.name,
            role = %employee.role,
            "Adding employee to roster"
        );
        self.employees.push(employee);
    }

    /// Returns copies of every employee matching `query`, in roster order.
    ///
    /// The result is independent of the roster: changing it has no effect
    /// on later lookups.
    pub fn find_employees(&self, query: &EmployeeQuery) -> Vec<Employee> {
        let found: Vec<Employee> = self
            .employees
            .iter()
            .filter(|employee| query.matches(employee))
            .cloned()
            .collect();
        debug!(
            role = ?query.role(),
            name = ?query.name(),
            matches = found.len(),
            "Employee lookup"
        );
        found
    }

    /// The held employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees held.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: Uuid) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Looks up an employee by id for mutation.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == id)
    }

    fn require(&self, id: Uuid) -> RosterResult<&Employee> {
        self.get(id).ok_or(RosterError::EmployeeNotFound { id })
    }

    fn require_mut(&mut self, id: Uuid) -> RosterResult<&mut Employee> {
        self.get_mut(id).ok_or(RosterError::EmployeeNotFound { id })
    }

    /// Computes the payment due to the employee with the given id.
    pub fn pay(&self, id: Uuid) -> RosterResult<Payment> {
        self.require(id)?.pay()
    }

    /// Computes the payment due to every employee, in roster order.
    ///
    /// Fails with `CalculationError` if any single payment or the total
    /// overflows.
    pub fn payroll(&self) -> RosterResult<Payroll> {
        let payments = self
            .employees
            .iter()
            .map(Employee::pay)
            .collect::<RosterResult<Vec<Payment>>>()?;
        Payroll::from_payments(payments)
    }

    /// Takes time off for the employee with the given id and returns the
    /// remaining balance.
    pub fn take_time_off(&mut self, id: Uuid, days: u32) -> RosterResult<u32> {
        self.require_mut(id)?.take_time_off(days)
    }

    /// Pays out a holiday for the employee with the given id and returns the
    /// remaining balance.
    pub fn payout_holiday(&mut self, id: Uuid) -> RosterResult<u32> {
        self.require_mut(id)?.payout_holiday()
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
