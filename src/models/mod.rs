//! Core data models for the Roster Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payment;
mod role;

pub use employee::{
    Compensation, DEFAULT_HOURLY_RATE, DEFAULT_HOURS_WORKED, DEFAULT_MONTHLY_SALARY,
    DEFAULT_VACATION_DAYS, Employee,
};
pub use payment::{Payment, Payroll};
pub use role::Role;
