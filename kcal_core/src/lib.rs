#![forbid(unsafe_code)]

//! Core domain model and business logic for the kcal metabolic estimator.
//!
//! This crate provides:
//! - Domain types (profiles, activity levels, metabolic results)
//! - Profile validation
//! - Metabolic computation (Mifflin-St Jeor BMR, daily calorie needs)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod validation;
pub mod metabolics;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::{Config, TargetsConfig};
pub use validation::validate;
pub use metabolics::{calorie_targets, compute_metabolics, mifflin_st_jeor};
