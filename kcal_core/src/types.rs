//! Core domain types for the kcal metabolic estimator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw and validated biometric profiles
//! - Sex and activity-level enumerations
//! - Metabolic computation results and calorie targets

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Field Enumerations
// ============================================================================

/// Sex for BMR calculation (selects the Mifflin-St Jeor constant set)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a user-entered sex string (case-insensitive)
    ///
    /// Returns None for anything outside the two modelled categories.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Canonical snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level, mapped to a fixed TDEE multiplier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// All levels, ordered from least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    /// Parse a user-entered activity level (case-insensitive, exact match)
    ///
    /// Returns None for values outside the five enumerated levels; callers
    /// must reject those, never substitute a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" => Some(ActivityLevel::LightlyActive),
            "moderately_active" => Some(ActivityLevel::ModeratelyActive),
            "very_active" => Some(ActivityLevel::VeryActive),
            "extremely_active" => Some(ActivityLevel::ExtremelyActive),
            _ => None,
        }
    }

    /// Canonical snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    /// Fixed TDEE multiplier for this level
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    /// Short human-readable description of the exercise frequency
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little or no exercise",
            ActivityLevel::LightlyActive => "light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "hard exercise 6-7 days/week",
            ActivityLevel::ExtremelyActive => "hard training twice a day",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Profile Types
// ============================================================================

/// Unvalidated user-entered biometric fields
///
/// Numeric fields are carried wide (signed age, raw floats) and the
/// enumerated fields as free text, so every out-of-domain input is
/// representable and can be rejected with a precise error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawProfile {
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub activity_level: String,
}

/// A validated biometric profile
///
/// Invariants (enforced by `validation::validate`, never constructed from
/// unchecked input): age in [1, 120], weight and height strictly positive
/// and finite.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
}

// ============================================================================
// Result Types
// ============================================================================

/// Metabolic estimate derived from a validated profile
///
/// Both values are kcal/day, rounded to two decimals. Computed on demand
/// and never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetabolicResult {
    pub bmr: f64,
    pub daily_calorie_need: f64,
}

/// Whole-kcal daily intake targets derived from a metabolic estimate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieTargets {
    pub maintenance: f64,
    pub weight_loss: f64,
    pub weight_gain: f64,
}
