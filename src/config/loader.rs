//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{RosterError, RosterResult};
use crate::roster::Roster;

use super::types::{EmployeeDefaults, RosterConfig};

/// Origin reported in errors for configuration parsed from memory.
const INLINE_ORIGIN: &str = "<inline>";

/// Loads a roster configuration and builds rosters from it.
///
/// # File Format
///
/// ```text
/// defaults:            # optional
///   vacation_days: 25
///   hourly_rate: "50"
///   hours_worked: 10
///   monthly_salary: "5000"
/// employees:
///   - name: Louis
///     role: manager
///     pay_type: salaried
///   - name: Tim
///     role: intern
///     pay_type: hourly
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml")?;
/// let roster = loader.build_roster()?;
/// println!("Loaded {} employees", roster.len());
/// # Ok::<(), roster_engine::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    origin: String,
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or an unknown field value (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from YAML text held in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml(
    ///     "employees:\n  - name: Tim\n    role: intern\n    pay_type: hourly\n",
    /// )?;
    /// assert_eq!(loader.config().employees.len(), 1);
    /// # Ok::<(), roster_engine::error::RosterError>(())
    /// ```
    pub fn from_yaml(content: &str) -> RosterResult<Self> {
        Self::parse(content, INLINE_ORIGIN.to_string())
    }

    fn parse(content: &str, origin: String) -> RosterResult<Self> {
        let config: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| RosterError::ConfigParseError {
                path: origin.clone(),
                message: e.to_string(),
            })?;

        info!(
            origin = %origin,
            employees = config.employees.len(),
            "Loaded roster configuration"
        );

        Ok(Self { origin, config })
    }

    /// Where the configuration was read from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the defaults applied to entries.
    pub fn defaults(&self) -> &EmployeeDefaults {
        &self.config.defaults
    }

    /// Builds a roster holding every configured employee, in file order.
    ///
    /// Each employee is validated; the first invalid entry aborts the build
    /// with `InvalidEmployee`.
    pub fn build_roster(&self) -> RosterResult<Roster> {
        let defaults = self.defaults();
        let mut roster = Roster::new();

        for entry in &self.config.employees {
            let employee = entry.to_employee(defaults);
            employee.validate()?;
            roster.add_employee(employee);
        }

        info!(
            origin = %self.origin,
            employees = roster.len(),
            "Built roster from configuration"
        );

        Ok(roster)
    }
}
