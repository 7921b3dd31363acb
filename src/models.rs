use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, selects the Mifflin-St Jeor offset term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// General lifestyle activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Intensity of structured training sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingIntensity {
    Low,
    Medium,
    High,
}

/// Nutrition goal applied as a final calorie adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Maintenance,
    WeightLoss,
    MuscleGain,
    Performance,
}

/// Athlete body metrics used for the energy calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Body weight in kilograms (30-200)
    pub weight_kg: f64,

    /// Height in centimeters (100-250)
    pub height_cm: f64,

    /// Age in whole years (16-100)
    pub age_years: u32,

    pub sex: Sex,
}

/// Weekly training volume and general activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoad {
    pub activity_level: ActivityLevel,

    pub training_intensity: TrainingIntensity,

    /// Structured training minutes per week (0-1680)
    pub weekly_training_minutes: u32,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macronutrients {
    pub protein_grams: u32,
    pub carbohydrate_grams: u32,
    pub fat_grams: u32,
}

/// Daily fluid and electrolyte targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hydration {
    pub water_ml: u32,
    pub sodium_mg: u32,
    pub potassium_mg: u32,
    pub magnesium_mg: u32,
}

/// Complete result of a nutrition calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Resting energy expenditure in kcal/day
    pub basal_metabolic_rate: f64,

    /// Goal-adjusted energy target in kcal/day
    pub total_daily_calories: f64,

    pub macronutrients: Macronutrients,

    pub hydration: Hydration,

    /// Coaching guidance, in rule order
    pub recommendations: Vec<String>,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Factor scaling BMR to total daily expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Very active",
            ActivityLevel::VeryActive => "Extremely active",
        }
    }
}

impl TrainingIntensity {
    pub const ALL: [TrainingIntensity; 3] = [
        TrainingIntensity::Low,
        TrainingIntensity::Medium,
        TrainingIntensity::High,
    ];

    /// Sport-specific factor stacked on top of the activity multiplier
    pub fn multiplier(&self) -> f64 {
        match self {
            TrainingIntensity::Low => 1.1,
            TrainingIntensity::Medium => 1.2,
            TrainingIntensity::High => 1.3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingIntensity::Low => "Low",
            TrainingIntensity::Medium => "Medium",
            TrainingIntensity::High => "High",
        }
    }
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::Maintenance,
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Performance,
    ];

    /// Multiplicative adjustment applied to total calories
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::Maintenance => 1.0,
            Goal::WeightLoss => 0.85,
            Goal::MuscleGain => 1.15,
            Goal::Performance => 1.10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Maintenance => "Weight maintenance",
            Goal::WeightLoss => "Weight loss",
            Goal::MuscleGain => "Muscle gain",
            Goal::Performance => "Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Maintenance => "Keep your current weight",
            Goal::WeightLoss => "Lose weight progressively",
            Goal::MuscleGain => "Build muscle mass",
            Goal::Performance => "Optimize athletic performance",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
            ActivityLevel::VeryActive => write!(f, "very_active"),
        }
    }
}

impl fmt::Display for TrainingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingIntensity::Low => write!(f, "low"),
            TrainingIntensity::Medium => write!(f, "medium"),
            TrainingIntensity::High => write!(f, "high"),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Maintenance => write!(f, "maintenance"),
            Goal::WeightLoss => write!(f, "weight_loss"),
            Goal::MuscleGain => write!(f, "muscle_gain"),
            Goal::Performance => write!(f, "performance"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Invalid sex: {}", s)),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Invalid activity level: {}", s)),
        }
    }
}

impl FromStr for TrainingIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TrainingIntensity::Low),
            "medium" => Ok(TrainingIntensity::Medium),
            "high" => Ok(TrainingIntensity::High),
            _ => Err(format!("Invalid training intensity: {}", s)),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "maintenance" => Ok(Goal::Maintenance),
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "performance" => Ok(Goal::Performance),
            _ => Err(format!("Invalid goal: {}", s)),
        }
    }
}

impl Default for AthleteProfile {
    fn default() -> Self {
        AthleteProfile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            sex: Sex::Male,
        }
    }
}

impl Default for TrainingLoad {
    fn default() -> Self {
        // 5 hours per week
        TrainingLoad {
            activity_level: ActivityLevel::Moderate,
            training_intensity: TrainingIntensity::Medium,
            weekly_training_minutes: 300,
        }
    }
}

impl TrainingLoad {
    /// Weekly training volume expressed in hours
    pub fn training_hours(&self) -> f64 {
        self.weekly_training_minutes as f64 / 60.0
    }
}
