//! Configuration loading for the Roster Engine.
//!
//! This module provides functionality to seed a roster from a YAML file,
//! including defaults for vacation balance and pay.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let roster = ConfigLoader::load("./config/roster.yaml")?.build_roster()?;
//! println!("Loaded {} employees", roster.len());
//! # Ok::<(), roster_engine::error::RosterError>(())
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeeDefaults, EmployeeEntry, PayEntry, RosterConfig};
