//! Metabolic computation.
//!
//! BMR via the Mifflin-St Jeor equation (1990), scaled by a fixed activity
//! multiplier into a total daily calorie need. Pure functions, no I/O; a
//! validated profile cannot make them fail.

use crate::config::TargetsConfig;
use crate::{CalorieTargets, MetabolicResult, Profile, Sex};

const MALE_CONSTANT: f64 = 5.0;
const FEMALE_CONSTANT: f64 = -161.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + constant
/// (constant: +5 male, -161 female). Returns the unrounded value in
/// kcal/day.
pub fn mifflin_st_jeor(profile: &Profile) -> f64 {
    let sex_constant = match profile.sex {
        Sex::Male => MALE_CONSTANT,
        Sex::Female => FEMALE_CONSTANT,
    };

    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age)
        + sex_constant
}

/// Compute the metabolic estimate for a validated profile
///
/// Daily calorie need is derived from the unrounded BMR, then both values
/// are rounded to two decimals so identical input always produces an
/// identical result.
pub fn compute_metabolics(profile: &Profile) -> MetabolicResult {
    let bmr = mifflin_st_jeor(profile);
    let daily_calorie_need = bmr * profile.activity_level.multiplier();

    MetabolicResult {
        bmr: round_kcal(bmr),
        daily_calorie_need: round_kcal(daily_calorie_need),
    }
}

/// Derive whole-kcal daily intake targets from a metabolic estimate
///
/// Maintenance is the daily calorie need; weight-loss and weight-gain
/// targets subtract/add the configured adjustment.
pub fn calorie_targets(result: &MetabolicResult, config: &TargetsConfig) -> CalorieTargets {
    let maintenance = result.daily_calorie_need.round();

    CalorieTargets {
        maintenance,
        weight_loss: (maintenance - config.deficit_kcal).round(),
        weight_gain: (maintenance + config.surplus_kcal).round(),
    }
}

/// Round to the two-decimal presentation precision used for all kcal values
fn round_kcal(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActivityLevel;

    fn profile(sex: Sex, age: u32, weight_kg: f64, height_cm: f64, level: ActivityLevel) -> Profile {
        Profile {
            age,
            weight_kg,
            height_cm,
            sex,
            activity_level: level,
        }
    }

    #[test]
    fn test_male_moderately_active() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 1780, * 1.55 = 2759
        let p = profile(Sex::Male, 30, 80.0, 180.0, ActivityLevel::ModeratelyActive);
        let result = compute_metabolics(&p);

        assert_eq!(result.bmr, 1780.0);
        assert_eq!(result.daily_calorie_need, 2759.0);
    }

    #[test]
    fn test_female_sedentary() {
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25, * 1.2 = 1614.3
        let p = profile(Sex::Female, 25, 60.0, 165.0, ActivityLevel::Sedentary);
        let result = compute_metabolics(&p);

        assert_eq!(result.bmr, 1345.25);
        assert_eq!(result.daily_calorie_need, 1614.3);
    }

    #[test]
    fn test_sex_constant_offset() {
        let male = profile(Sex::Male, 40, 70.0, 170.0, ActivityLevel::Sedentary);
        let female = profile(Sex::Female, 40, 70.0, 170.0, ActivityLevel::Sedentary);

        let diff = mifflin_st_jeor(&male) - mifflin_st_jeor(&female);
        assert_eq!(diff, MALE_CONSTANT - FEMALE_CONSTANT);
    }

    #[test]
    fn test_multiplier_applied_per_level() {
        for level in ActivityLevel::ALL {
            let p = profile(Sex::Male, 30, 80.0, 180.0, level);
            let result = compute_metabolics(&p);

            let expected = 1780.0 * level.multiplier();
            assert!(
                (result.daily_calorie_need - expected).abs() < 0.01,
                "level {} expected {} got {}",
                level,
                expected,
                result.daily_calorie_need
            );
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let p = profile(Sex::Female, 25, 60.0, 165.0, ActivityLevel::Sedentary);

        let first = compute_metabolics(&p);
        for _ in 0..10 {
            let repeat = compute_metabolics(&p);
            assert_eq!(repeat.bmr.to_bits(), first.bmr.to_bits());
            assert_eq!(
                repeat.daily_calorie_need.to_bits(),
                first.daily_calorie_need.to_bits()
            );
        }
    }

    #[test]
    fn test_output_precision_is_two_decimals() {
        let p = profile(Sex::Female, 33, 57.1, 162.7, ActivityLevel::LightlyActive);
        let result = compute_metabolics(&p);

        // Re-rounding an already-rounded result must be a no-op
        assert_eq!(result.bmr, (result.bmr * 100.0).round() / 100.0);
        assert_eq!(
            result.daily_calorie_need,
            (result.daily_calorie_need * 100.0).round() / 100.0
        );
    }

    #[test]
    fn test_default_calorie_targets() {
        let p = profile(Sex::Male, 30, 80.0, 180.0, ActivityLevel::ModeratelyActive);
        let result = compute_metabolics(&p);
        let targets = calorie_targets(&result, &TargetsConfig::default());

        assert_eq!(targets.maintenance, 2759.0);
        assert_eq!(targets.weight_loss, 2259.0);
        assert_eq!(targets.weight_gain, 3259.0);
    }

    #[test]
    fn test_configured_calorie_targets() {
        let config = TargetsConfig {
            deficit_kcal: 300.0,
            surplus_kcal: 250.0,
        };

        let result = MetabolicResult {
            bmr: 1500.0,
            daily_calorie_need: 2000.0,
        };
        let targets = calorie_targets(&result, &config);

        assert_eq!(targets.maintenance, 2000.0);
        assert_eq!(targets.weight_loss, 1700.0);
        assert_eq!(targets.weight_gain, 2250.0);
    }
}
