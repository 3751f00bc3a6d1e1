//! Roster Engine
//!
//! This crate provides an in-memory employee roster: hourly and salaried
//! employees, pay calculation, vacation-day bookkeeping, and role/name lookup.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
