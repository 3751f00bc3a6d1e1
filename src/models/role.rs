//! Employee roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role an employee holds within the company.
///
/// Roles are a flat set: no role is privileged by any roster operation.
///
/// # Example
///
/// ```
/// use roster_engine::models::Role;
///
/// assert_eq!(Role::VicePresident.to_string(), "vice_president");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Company president.
    President,
    /// Vice president.
    VicePresident,
    /// Manager.
    Manager,
    /// Team lead.
    Lead,
    /// Individual contributor.
    Worker,
    /// Intern.
    Intern,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::President,
        Role::VicePresident,
        Role::Manager,
        Role::Lead,
        Role::Worker,
        Role::Intern,
    ];

    /// Returns the snake_case name used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::President => "president",
            Role::VicePresident => "vice_president",
            Role::Manager => "manager",
            Role::Lead => "lead",
            Role::Worker => "worker",
            Role::Intern => "intern",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization_matches_display() {
        for role in Role::ALL {
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{}\"", role)
            );
        }
    }

    #[test]
    fn test_deserialize_vice_president() {
        let role: Role = serde_json::from_str("\"vice_president\"").unwrap();
        assert_eq!(role, Role::VicePresident);
    }

    #[test]
    fn test_deserialize_unknown_role_fails() {
        let result: Result<Role, _> = serde_json::from_str("\"ceo\"");
        assert!(result.is_err());
    }
}
