//! Profile validation.
//!
//! Raw user-entered fields are checked against their domain ranges before
//! any computation runs. Fields are checked in declaration order (age,
//! weight, height, sex, activity level) and the first failing constraint
//! is reported; nothing downstream ever sees a rejected profile.

use crate::{ActivityLevel, Profile, RawProfile, Sex, ValidationError};

/// Minimum accepted age in years
pub const MIN_AGE: i64 = 1;

/// Maximum accepted age in years
pub const MAX_AGE: i64 = 120;

/// Validate raw biometric fields into a `Profile`
///
/// No side effects. Invalid enumerated values are rejected, never coerced
/// to a default.
pub fn validate(raw: &RawProfile) -> std::result::Result<Profile, ValidationError> {
    let age = validate_age(raw.age)?;
    let weight_kg = validate_dimension(raw.weight, "weight", "kilograms")?;
    let height_cm = validate_dimension(raw.height, "height", "centimetres")?;

    let sex = Sex::parse(&raw.sex)
        .ok_or_else(|| ValidationError::new("sex", "sex must be 'male' or 'female'"))?;

    let activity_level = ActivityLevel::parse(&raw.activity_level).ok_or_else(|| {
        let names: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.as_str()).collect();
        ValidationError::new(
            "activity_level",
            format!("activity_level must be one of: {}", names.join(", ")),
        )
    })?;

    tracing::debug!(
        "Validated profile: {} {}, {:.1} kg, {:.1} cm, {}",
        age,
        sex,
        weight_kg,
        height_cm,
        activity_level
    );

    Ok(Profile {
        age,
        weight_kg,
        height_cm,
        sex,
        activity_level,
    })
}

fn validate_age(age: i64) -> std::result::Result<u32, ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::new(
            "age",
            format!("age must be between {} and {}", MIN_AGE, MAX_AGE),
        ));
    }
    // Range check above keeps this in u32
    Ok(age as u32)
}

fn validate_dimension(
    value: f64,
    field: &'static str,
    unit: &str,
) -> std::result::Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(
            field,
            format!("{} must be a positive number of {}", field, unit),
        ));
    }
    Ok(value)
}
