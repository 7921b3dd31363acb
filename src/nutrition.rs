//! Daily nutrition needs for endurance athletes
//!
//! Turns an athlete profile, a weekly training load and a goal into daily
//! energy, macronutrient and hydration targets.
//!
//! # Formula chain
//!
//! The stages run in a fixed order and each one only reads the previous
//! result:
//!
//! 1. **BMR** via Mifflin-St Jeor:
//!    `10·weight + 6.25·height − 5·age + 5` (male) or `− 161` (female)
//! 2. **Maintenance**: BMR × activity multiplier × training intensity multiplier.
//!    The two factors compound, so lifestyle and sport-specific load both count.
//! 3. **Training surcharge**: weekly training hours × 200 kcal
//! 4. **Goal**: weight loss ×0.85, muscle gain ×1.15, performance ×1.10
//! 5. **Macro split**: protein 20% (25% for muscle gain), carbohydrate 55%
//!    (60% at high intensity), fat takes the remainder
//! 6. **Hydration**: water from body weight plus training volume, electrolytes
//!    from a fixed base plus training volume
//! 7. **Recommendations** from independent goal/intensity/volume rules
//!
//! Every empirical constant comes from [`NutritionCoefficients`].
//!
//! # Example
//!
//! ```rust
//! use fuelrs::{AthleteProfile, Goal, NutritionCalculator, TrainingLoad};
//!
//! let targets = NutritionCalculator::compute_targets(
//!     &AthleteProfile::default(),
//!     &TrainingLoad::default(),
//!     Goal::Maintenance,
//! );
//! assert_eq!(targets.hydration.water_ml, 4950);
//! ```

use crate::config::NutritionCoefficients;
use crate::error::Result;
use crate::models::{
    AthleteProfile, Goal, Hydration, Macronutrients, NutritionTargets, Sex, TrainingIntensity,
    TrainingLoad,
};
use crate::validation::InputValidator;
use std::fmt;
use tracing::debug;

/// Share of total calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
}

/// Coaching guidance attached to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    ModerateDeficit,
    PreserveLeanMass,
    CaloricSurplus,
    ProteinEveryMeal,
    GlycogenStores,
    HydrationAndElectrolytes,
    ActiveRecovery,
    Antioxidants,
    IronAndB12,
    EnduranceMealPlanning,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::ModerateDeficit => "moderate caloric deficit",
            Recommendation::PreserveLeanMass => "prioritize protein to preserve lean mass",
            Recommendation::CaloricSurplus => "caloric surplus to support muscle gain",
            Recommendation::ProteinEveryMeal => "protein at every meal",
            Recommendation::GlycogenStores => "optimize glycogen stores",
            Recommendation::HydrationAndElectrolytes => "hydration and electrolytes are essential",
            Recommendation::ActiveRecovery => "active recovery with carbs and protein",
            Recommendation::Antioxidants => "antioxidants to reduce inflammation",
            Recommendation::IronAndB12 => "iron- and B12-rich diet",
            Recommendation::EnduranceMealPlanning => "meal planning for endurance",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Stateless nutrition needs calculator
pub struct NutritionCalculator;

impl NutritionCalculator {
    /// Validate the inputs, then compute targets with the default coefficients
    pub fn calculate(
        profile: &AthleteProfile,
        load: &TrainingLoad,
        goal: Goal,
    ) -> Result<NutritionTargets> {
        Self::calculate_with(&NutritionCoefficients::default(), profile, load, goal)
    }

    /// Validate the inputs, then compute targets with a custom coefficient table
    pub fn calculate_with(
        coefficients: &NutritionCoefficients,
        profile: &AthleteProfile,
        load: &TrainingLoad,
        goal: Goal,
    ) -> Result<NutritionTargets> {
        InputValidator::validate(profile, load)?;
        Ok(Self::compute_targets_with(coefficients, profile, load, goal))
    }

    /// Compute targets with the default coefficients.
    ///
    /// Total over any input: out-of-domain values yield meaningless but
    /// well-formed targets. Use [`NutritionCalculator::calculate`] to reject them.
    pub fn compute_targets(
        profile: &AthleteProfile,
        load: &TrainingLoad,
        goal: Goal,
    ) -> NutritionTargets {
        Self::compute_targets_with(&NutritionCoefficients::default(), profile, load, goal)
    }

    /// Run the full formula chain with a custom coefficient table
    pub fn compute_targets_with(
        coefficients: &NutritionCoefficients,
        profile: &AthleteProfile,
        load: &TrainingLoad,
        goal: Goal,
    ) -> NutritionTargets {
        let bmr = Self::basal_metabolic_rate(profile);
        let maintenance = Self::maintenance_calories(bmr, load);
        let surcharge = Self::training_surcharge(load, coefficients);
        let total_daily_calories = Self::apply_goal(maintenance + surcharge, goal);

        debug!(
            bmr,
            maintenance,
            surcharge,
            total_daily_calories,
            goal = %goal,
            "Energy targets computed"
        );

        let ratios = Self::macro_ratios(goal, load.training_intensity, coefficients);
        let macronutrients = Self::macronutrients(total_daily_calories, &ratios, coefficients);
        let hydration = Self::hydration(profile, load, coefficients);
        let recommendations = Self::recommendations(goal, load, coefficients)
            .into_iter()
            .map(|r| r.message().to_string())
            .collect();

        debug!(?macronutrients, ?hydration, "Macro and hydration targets computed");

        NutritionTargets {
            basal_metabolic_rate: bmr,
            total_daily_calories,
            macronutrients,
            hydration,
            recommendations,
        }
    }

    /// Mifflin-St Jeor basal metabolic rate in kcal/day
    pub fn basal_metabolic_rate(profile: &AthleteProfile) -> f64 {
        let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
            - 5.0 * profile.age_years as f64;

        match profile.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// BMR scaled by the activity and intensity multipliers
    pub fn maintenance_calories(bmr: f64, load: &TrainingLoad) -> f64 {
        bmr * load.activity_level.multiplier() * load.training_intensity.multiplier()
    }

    /// Daily surcharge derived from weekly training volume
    pub fn training_surcharge(load: &TrainingLoad, coefficients: &NutritionCoefficients) -> f64 {
        load.training_hours() * coefficients.training_kcal_per_hour
    }

    pub fn apply_goal(calories: f64, goal: Goal) -> f64 {
        calories * goal.calorie_factor()
    }

    /// Macro split for a goal and intensity; fat is whatever remains
    pub fn macro_ratios(
        goal: Goal,
        intensity: TrainingIntensity,
        coefficients: &NutritionCoefficients,
    ) -> MacroRatios {
        let protein = if goal == Goal::MuscleGain {
            coefficients.muscle_gain_protein_ratio
        } else {
            coefficients.protein_ratio
        };

        let carbohydrate = if intensity == TrainingIntensity::High {
            coefficients.high_intensity_carb_ratio
        } else {
            coefficients.carb_ratio
        };

        MacroRatios {
            protein,
            carbohydrate,
            fat: 1.0 - protein - carbohydrate,
        }
    }

    /// Convert a calorie target into whole grams per macronutrient
    pub fn macronutrients(
        calories: f64,
        ratios: &MacroRatios,
        coefficients: &NutritionCoefficients,
    ) -> Macronutrients {
        Macronutrients {
            protein_grams: round_to_unit(
                calories * ratios.protein / coefficients.kcal_per_gram_protein,
            ),
            carbohydrate_grams: round_to_unit(
                calories * ratios.carbohydrate / coefficients.kcal_per_gram_carbohydrate,
            ),
            fat_grams: round_to_unit(calories * ratios.fat / coefficients.kcal_per_gram_fat),
        }
    }

    /// Energy carried by rounded macro grams
    pub fn macro_calories(macros: &Macronutrients, coefficients: &NutritionCoefficients) -> f64 {
        macros.protein_grams as f64 * coefficients.kcal_per_gram_protein
            + macros.carbohydrate_grams as f64 * coefficients.kcal_per_gram_carbohydrate
            + macros.fat_grams as f64 * coefficients.kcal_per_gram_fat
    }

    /// Water and electrolyte targets
    pub fn hydration(
        profile: &AthleteProfile,
        load: &TrainingLoad,
        coefficients: &NutritionCoefficients,
    ) -> Hydration {
        let hours = load.training_hours();

        Hydration {
            water_ml: round_to_unit(
                profile.weight_kg * coefficients.water_ml_per_kg
                    + hours * coefficients.water_ml_per_training_hour,
            ),
            sodium_mg: round_to_unit(
                coefficients.sodium_base_mg + hours * coefficients.sodium_mg_per_training_hour,
            ),
            potassium_mg: round_to_unit(
                coefficients.potassium_base_mg
                    + hours * coefficients.potassium_mg_per_training_hour,
            ),
            magnesium_mg: round_to_unit(
                coefficients.magnesium_base_mg
                    + hours * coefficients.magnesium_mg_per_training_hour,
            ),
        }
    }

    /// Guidance matched by goal, intensity and weekly volume, in that order
    pub fn recommendations(
        goal: Goal,
        load: &TrainingLoad,
        coefficients: &NutritionCoefficients,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        match goal {
            Goal::WeightLoss => recommendations.extend([
                Recommendation::ModerateDeficit,
                Recommendation::PreserveLeanMass,
            ]),
            Goal::MuscleGain => recommendations.extend([
                Recommendation::CaloricSurplus,
                Recommendation::ProteinEveryMeal,
            ]),
            Goal::Performance => recommendations.extend([
                Recommendation::GlycogenStores,
                Recommendation::HydrationAndElectrolytes,
            ]),
            Goal::Maintenance => {}
        }

        if load.training_intensity == TrainingIntensity::High {
            recommendations.extend([Recommendation::ActiveRecovery, Recommendation::Antioxidants]);
        }

        if load.weekly_training_minutes > coefficients.endurance_threshold_minutes {
            recommendations.extend([
                Recommendation::IronAndB12,
                Recommendation::EnduranceMealPlanning,
            ]);
        }

        recommendations
    }
}

/// Round to the nearest whole unit; negative and NaN results become 0
fn round_to_unit(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuelError;
    use crate::models::ActivityLevel;

    fn reference_profile() -> AthleteProfile {
        AthleteProfile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            sex: Sex::Male,
        }
    }

    fn reference_load(minutes: u32) -> TrainingLoad {
        TrainingLoad {
            activity_level: ActivityLevel::Moderate,
            training_intensity: TrainingIntensity::Medium,
            weekly_training_minutes: minutes,
        }
    }

    #[test]
    fn test_reference_athlete() {
        let targets = NutritionCalculator::compute_targets(
            &reference_profile(),
            &reference_load(300),
            Goal::Maintenance,
        );

        assert!((targets.basal_metabolic_rate - 1648.75).abs() < 1e-9);
        assert!((targets.total_daily_calories - 4066.675).abs() < 1e-6);
        assert_eq!(targets.total_daily_calories.round(), 4067.0);

        assert_eq!(targets.macronutrients.protein_grams, 203);
        assert_eq!(targets.macronutrients.carbohydrate_grams, 559);
        assert_eq!(targets.macronutrients.fat_grams, 113);

        assert_eq!(targets.hydration.water_ml, 4950);
        assert_eq!(targets.hydration.sodium_mg, 4000);
        assert_eq!(targets.hydration.potassium_mg, 4500);
        assert_eq!(targets.hydration.magnesium_mg, 650);

        // 300 minutes is not above the endurance threshold
        assert!(targets.recommendations.is_empty());
    }

    #[test]
    fn test_endurance_threshold_is_exclusive() {
        let coefficients = NutritionCoefficients::default();

        let at_threshold = NutritionCalculator::recommendations(
            Goal::Maintenance,
            &reference_load(300),
            &coefficients,
        );
        assert!(at_threshold.is_empty());

        let above = NutritionCalculator::recommendations(
            Goal::Maintenance,
            &reference_load(301),
            &coefficients,
        );
        assert_eq!(
            above,
            vec![Recommendation::IronAndB12, Recommendation::EnduranceMealPlanning]
        );
    }

    #[test]
    fn test_female_offset() {
        let female = AthleteProfile {
            sex: Sex::Female,
            ..reference_profile()
        };
        let male_bmr = NutritionCalculator::basal_metabolic_rate(&reference_profile());
        let female_bmr = NutritionCalculator::basal_metabolic_rate(&female);
        assert!((male_bmr - female_bmr - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_multipliers_compound() {
        let load = TrainingLoad {
            activity_level: ActivityLevel::VeryActive,
            training_intensity: TrainingIntensity::High,
            weekly_training_minutes: 0,
        };
        let maintenance = NutritionCalculator::maintenance_calories(1000.0, &load);
        assert!((maintenance - 1000.0 * 1.9 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_macro_ratios() {
        let coefficients = NutritionCoefficients::default();

        let gain = NutritionCalculator::macro_ratios(
            Goal::MuscleGain,
            TrainingIntensity::High,
            &coefficients,
        );
        assert_eq!(gain.protein, 0.25);
        assert_eq!(gain.carbohydrate, 0.60);
        assert!((gain.fat - 0.15).abs() < 1e-12);

        let base = NutritionCalculator::macro_ratios(
            Goal::Performance,
            TrainingIntensity::Low,
            &coefficients,
        );
        assert_eq!(base.protein, 0.20);
        assert_eq!(base.carbohydrate, 0.55);
        assert!((base.fat - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_recommendation_rule_order() {
        let load = TrainingLoad {
            activity_level: ActivityLevel::Active,
            training_intensity: TrainingIntensity::High,
            weekly_training_minutes: 600,
        };
        let recommendations = NutritionCalculator::recommendations(
            Goal::Performance,
            &load,
            &NutritionCoefficients::default(),
        );

        assert_eq!(
            recommendations,
            vec![
                Recommendation::GlycogenStores,
                Recommendation::HydrationAndElectrolytes,
                Recommendation::ActiveRecovery,
                Recommendation::Antioxidants,
                Recommendation::IronAndB12,
                Recommendation::EnduranceMealPlanning,
            ]
        );
        assert_eq!(recommendations[4].to_string(), "iron- and B12-rich diet");
    }

    #[test]
    fn test_custom_surcharge_coefficient() {
        let coefficients = NutritionCoefficients {
            training_kcal_per_hour: 300.0,
            ..NutritionCoefficients::default()
        };
        let default_targets = NutritionCalculator::compute_targets(
            &reference_profile(),
            &reference_load(300),
            Goal::Maintenance,
        );
        let custom_targets = NutritionCalculator::compute_targets_with(
            &coefficients,
            &reference_profile(),
            &reference_load(300),
            Goal::Maintenance,
        );

        // 5 hours × 100 extra kcal
        let delta = custom_targets.total_daily_calories - default_targets.total_daily_calories;
        assert!((delta - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_rejects_out_of_domain_input() {
        let profile = AthleteProfile {
            weight_kg: -70.0,
            ..reference_profile()
        };
        let result =
            NutritionCalculator::calculate(&profile, &reference_load(300), Goal::Maintenance);
        assert!(matches!(result, Err(FuelError::Validation(_))));
    }

    #[test]
    fn test_compute_targets_is_total_for_out_of_domain_input() {
        let profile = AthleteProfile {
            weight_kg: -500.0,
            height_cm: 0.0,
            age_years: 150,
            sex: Sex::Female,
        };
        let targets =
            NutritionCalculator::compute_targets(&profile, &reference_load(0), Goal::WeightLoss);

        assert!(targets.total_daily_calories < 0.0);
        assert_eq!(targets.macronutrients.protein_grams, 0);
        assert_eq!(targets.hydration.water_ml, 0);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    fn profile_strategy() -> impl Strategy<Value = AthleteProfile> {
        (
            30.0f64..=200.0,
            100.0f64..=250.0,
            16u32..=100,
            prop::sample::select(Sex::ALL.to_vec()),
        )
            .prop_map(|(weight_kg, height_cm, age_years, sex)| AthleteProfile {
                weight_kg,
                height_cm,
                age_years,
                sex,
            })
    }

    fn load_strategy() -> impl Strategy<Value = TrainingLoad> {
        (
            prop::sample::select(ActivityLevel::ALL.to_vec()),
            prop::sample::select(TrainingIntensity::ALL.to_vec()),
            0u32..=1680,
        )
            .prop_map(|(activity_level, training_intensity, weekly_training_minutes)| TrainingLoad {
                activity_level,
                training_intensity,
                weekly_training_minutes,
            })
    }

    fn goal_strategy() -> impl Strategy<Value = Goal> {
        prop::sample::select(Goal::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_deterministic(
            profile in profile_strategy(),
            load in load_strategy(),
            goal in goal_strategy()
        ) {
            let first = NutritionCalculator::compute_targets(&profile, &load, goal);
            let second = NutritionCalculator::compute_targets(&profile, &load, goal);

            prop_assert_eq!(
                first.basal_metabolic_rate.to_bits(),
                second.basal_metabolic_rate.to_bits()
            );
            prop_assert_eq!(
                first.total_daily_calories.to_bits(),
                second.total_daily_calories.to_bits()
            );
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_macro_calories_match_total(
            profile in profile_strategy(),
            load in load_strategy(),
            goal in goal_strategy()
        ) {
            let coefficients = NutritionCoefficients::default();
            let targets = NutritionCalculator::compute_targets(&profile, &load, goal);
            let macro_kcal =
                NutritionCalculator::macro_calories(&targets.macronutrients, &coefficients);

            // Each gram amount is off by at most half a gram
            let tolerance = 0.5 * (4.0 + 4.0 + 9.0) + 1e-6;
            prop_assert!((macro_kcal - targets.total_daily_calories).abs() <= tolerance);
        }

        #[test]
        fn test_more_training_never_lowers_targets(
            profile in profile_strategy(),
            load in load_strategy(),
            goal in goal_strategy(),
            extra in 0u32..=600
        ) {
            let more = TrainingLoad {
                weekly_training_minutes: (load.weekly_training_minutes + extra).min(1680),
                ..load.clone()
            };
            let base = NutritionCalculator::compute_targets(&profile, &load, goal);
            let higher = NutritionCalculator::compute_targets(&profile, &more, goal);

            prop_assert!(higher.total_daily_calories >= base.total_daily_calories);
            prop_assert!(higher.hydration.water_ml >= base.hydration.water_ml);
            prop_assert!(higher.hydration.sodium_mg >= base.hydration.sodium_mg);
            prop_assert!(higher.hydration.potassium_mg >= base.hydration.potassium_mg);
            prop_assert!(higher.hydration.magnesium_mg >= base.hydration.magnesium_mg);
        }

        #[test]
        fn test_goal_ordering(profile in profile_strategy(), load in load_strategy()) {
            let total = |goal: Goal| {
                NutritionCalculator::compute_targets(&profile, &load, goal).total_daily_calories
            };

            prop_assert!(total(Goal::WeightLoss) < total(Goal::Maintenance));
            prop_assert!(total(Goal::Maintenance) < total(Goal::Performance));
            prop_assert!(total(Goal::Performance) < total(Goal::MuscleGain));
        }

        #[test]
        fn test_outputs_non_negative(
            profile in profile_strategy(),
            load in load_strategy(),
            goal in goal_strategy()
        ) {
            let targets = NutritionCalculator::compute_targets(&profile, &load, goal);

            prop_assert!(targets.basal_metabolic_rate >= 0.0);
            prop_assert!(targets.total_daily_calories >= 0.0);
            prop_assert!(NutritionCalculator::calculate(&profile, &load, goal).is_ok());
        }
    }
}
