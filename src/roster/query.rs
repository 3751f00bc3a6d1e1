//! Employee lookup filters.

use crate::models::{Employee, Role};

/// Filters applied by [`Roster::find_employees`](super::Roster::find_employees).
///
/// Every supplied filter must match. A query with no filters matches every
/// employee.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, Role};
/// use roster_engine::roster::EmployeeQuery;
///
/// let query = EmployeeQuery::new().with_role(Role::Intern).with_name("tim");
/// assert!(query.matches(&Employee::hourly("TIMOTHY", Role::Intern)));
/// assert!(!query.matches(&Employee::hourly("Tim", Role::Worker)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    role: Option<Role>,
    name: Option<String>,
}

impl EmployeeQuery {
    /// Creates a query with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to employees holding exactly `role`.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Restricts matches to employees whose name contains `name`,
    /// ignoring case. An empty string applies no restriction.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() {
            None
        } else {
            Some(name.to_lowercase())
        };
        self
    }

    /// The role filter, if any.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The lowercased name filter, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the query has no filters.
    pub fn is_unfiltered(&self) -> bool {
        self.role.is_none() && self.name.is_none()
    }

    /// Returns true if `employee` satisfies every filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.role.is_some_and(|role| employee.role != role) {
            return false;
        }
        match &self.name {
            Some(needle) => employee.name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_query_matches_everyone() {
        let query = EmployeeQuery::new();
        assert!(query.is_unfiltered());
        for role in Role::ALL {
            assert!(query.matches(&Employee::hourly("Anyone", role)));
        }
    }

    #[test]
    fn test_role_filter_is_exact() {
        let query = EmployeeQuery::new().with_role(Role::Manager);
        assert!(query.matches(&Employee::salaried("Louis", Role::Manager)));
        assert!(!query.matches(&Employee::hourly("Brenda", Role::President)));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let query = EmployeeQuery::new().with_name("tim");
        assert!(query.matches(&Employee::hourly("Tim", Role::Intern)));
        assert!(query.matches(&Employee::hourly("TIMOTHY", Role::Intern)));
        assert!(query.matches(&Employee::hourly("tim", Role::Intern)));
        assert!(query.matches(&Employee::hourly("Justin Timberlake", Role::Lead)));
        assert!(!query.matches(&Employee::hourly("Tom", Role::Intern)));
    }

    #[test]
    fn test_uppercase_name_filter_is_normalized() {
        let query = EmployeeQuery::new().with_name("LOU");
        assert_eq!(query.name(), Some("lou"));
        assert!(query.matches(&Employee::salaried("Louis", Role::Manager)));
    }

    #[test]
    fn test_empty_name_filter_applies_no_restriction() {
        let query = EmployeeQuery::new().with_name("");
        assert!(query.is_unfiltered());
        assert_eq!(query.name(), None);
    }

    #[test]
    fn test_both_filters_must_match() {
        let query = EmployeeQuery::new()
            .with_role(Role::Intern)
            .with_name("tim");
        assert_eq!(query.role(), Some(Role::Intern));
        assert!(query.matches(&Employee::hourly("Tim", Role::Intern)));
        assert!(!query.matches(&Employee::hourly("Tim", Role::Worker)));
        assert!(!query.matches(&Employee::hourly("Brenda", Role::Intern)));
    }
}
