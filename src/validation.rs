use crate::error::ValidationError;
use crate::models::{AthleteProfile, TrainingLoad};
use std::ops::RangeInclusive;

/// Accepted body weight in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted height in centimeters
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 100.0..=250.0;

/// Accepted age in years
pub const AGE_YEARS_RANGE: RangeInclusive<u32> = 16..=100;

/// Accepted weekly training volume, up to four hours a day
pub const WEEKLY_MINUTES_RANGE: RangeInclusive<u32> = 0..=1680;

/// Rejects calculator input outside the supported domain.
///
/// Nothing is clamped: a value outside its range is an error, so a bad
/// form entry never turns into a silently wrong target.
pub struct InputValidator;

impl InputValidator {
    /// Validate both inputs of a calculation
    pub fn validate(profile: &AthleteProfile, load: &TrainingLoad) -> Result<(), ValidationError> {
        Self::validate_profile(profile)?;
        Self::validate_load(load)?;
        Ok(())
    }

    pub fn validate_profile(profile: &AthleteProfile) -> Result<(), ValidationError> {
        Self::check_real("weight_kg", profile.weight_kg, &WEIGHT_KG_RANGE)?;
        Self::check_real("height_cm", profile.height_cm, &HEIGHT_CM_RANGE)?;
        Self::check_whole("age_years", profile.age_years, &AGE_YEARS_RANGE)?;
        Ok(())
    }

    pub fn validate_load(load: &TrainingLoad) -> Result<(), ValidationError> {
        Self::check_whole(
            "weekly_training_minutes",
            load.weekly_training_minutes,
            &WEEKLY_MINUTES_RANGE,
        )
    }

    fn check_real(
        field: &'static str,
        value: f64,
        range: &RangeInclusive<f64>,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            tracing::warn!(field, "Rejected non-finite input");
            return Err(ValidationError::NotFinite { field });
        }

        if !range.contains(&value) {
            tracing::warn!(field, value, "Rejected out-of-range input");
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(())
    }

    fn check_whole(
        field: &'static str,
        value: u32,
        range: &RangeInclusive<u32>,
    ) -> Result<(), ValidationError> {
        if !range.contains(&value) {
            tracing::warn!(field, value, "Rejected out-of-range input");
            return Err(ValidationError::OutOfRange {
                field,
                value: value as f64,
                min: *range.start() as f64,
                max: *range.end() as f64,
            });
        }

        Ok(())
    }
}
