use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FuelError;
use crate::logging::LogConfig;
use crate::models::{AthleteProfile, Goal, TrainingLoad};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub metadata: ConfigMetadata,

    /// Empirical constants used by the calculator
    #[serde(default)]
    pub coefficients: NutritionCoefficients,

    /// Values used when the CLI omits an input
    #[serde(default)]
    pub defaults: CalculatorDefaults,

    /// Logging output settings
    #[serde(default)]
    pub logging: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fixed empirical constants of the nutrition formula chain.
///
/// None of these are derived per athlete; they are kept here so they can be
/// revisited without touching the calculation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionCoefficients {
    /// Flat training surcharge in kcal per weekly training hour
    pub training_kcal_per_hour: f64,

    /// Baseline water need per kilogram of body weight
    pub water_ml_per_kg: f64,
    pub water_ml_per_training_hour: f64,

    pub sodium_base_mg: f64,
    pub sodium_mg_per_training_hour: f64,

    pub potassium_base_mg: f64,
    pub potassium_mg_per_training_hour: f64,

    pub magnesium_base_mg: f64,
    pub magnesium_mg_per_training_hour: f64,

    /// Share of calories from protein
    pub protein_ratio: f64,
    pub muscle_gain_protein_ratio: f64,

    /// Share of calories from carbohydrate
    pub carb_ratio: f64,
    pub high_intensity_carb_ratio: f64,

    pub kcal_per_gram_protein: f64,
    pub kcal_per_gram_carbohydrate: f64,
    pub kcal_per_gram_fat: f64,

    /// Weekly minutes above which endurance guidance is added (exclusive)
    pub endurance_threshold_minutes: u32,
}

/// Fallback calculator inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub profile: AthleteProfile,
    pub load: TrainingLoad,
    pub goal: Goal,
}

impl Default for NutritionCoefficients {
    fn default() -> Self {
        NutritionCoefficients {
            training_kcal_per_hour: 200.0,
            water_ml_per_kg: 35.0,
            water_ml_per_training_hour: 500.0,
            sodium_base_mg: 1500.0,
            sodium_mg_per_training_hour: 500.0,
            potassium_base_mg: 3500.0,
            potassium_mg_per_training_hour: 200.0,
            magnesium_base_mg: 400.0,
            magnesium_mg_per_training_hour: 50.0,
            protein_ratio: 0.20,
            muscle_gain_protein_ratio: 0.25,
            carb_ratio: 0.55,
            high_intensity_carb_ratio: 0.60,
            kcal_per_gram_protein: 4.0,
            kcal_per_gram_carbohydrate: 4.0,
            kcal_per_gram_fat: 9.0,
            endurance_threshold_minutes: 300,
        }
    }
}

impl NutritionCoefficients {
    /// Check that the table keeps every output non-negative
    pub fn validate(&self) -> crate::Result<()> {
        let non_negative = [
            ("training_kcal_per_hour", self.training_kcal_per_hour),
            ("water_ml_per_kg", self.water_ml_per_kg),
            ("water_ml_per_training_hour", self.water_ml_per_training_hour),
            ("sodium_base_mg", self.sodium_base_mg),
            ("sodium_mg_per_training_hour", self.sodium_mg_per_training_hour),
            ("potassium_base_mg", self.potassium_base_mg),
            ("potassium_mg_per_training_hour", self.potassium_mg_per_training_hour),
            ("magnesium_base_mg", self.magnesium_base_mg),
            ("magnesium_mg_per_training_hour", self.magnesium_mg_per_training_hour),
            ("protein_ratio", self.protein_ratio),
            ("muscle_gain_protein_ratio", self.muscle_gain_protein_ratio),
            ("carb_ratio", self.carb_ratio),
            ("high_intensity_carb_ratio", self.high_intensity_carb_ratio),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FuelError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let energy_densities = [
            ("kcal_per_gram_protein", self.kcal_per_gram_protein),
            ("kcal_per_gram_carbohydrate", self.kcal_per_gram_carbohydrate),
            ("kcal_per_gram_fat", self.kcal_per_gram_fat),
        ];

        for (name, value) in energy_densities {
            if !value.is_finite() || value <= 0.0 {
                return Err(FuelError::Configuration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        // Fat takes the remainder, so the largest protein + carb pair must fit
        let max_protein = self.protein_ratio.max(self.muscle_gain_protein_ratio);
        let max_carb = self.carb_ratio.max(self.high_intensity_carb_ratio);
        if max_protein + max_carb > 1.0 {
            return Err(FuelError::Configuration(format!(
                "protein and carbohydrate ratios sum to {:.2}, leaving no room for fat",
                max_protein + max_carb
            )));
        }

        Ok(())
    }
}

impl Default for ConfigMetadata {
    fn default() -> Self {
        let now = Utc::now();

        ConfigMetadata {
            version: "1.0".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            metadata: ConfigMetadata::default(),
            coefficients: NutritionCoefficients::default(),
            defaults: CalculatorDefaults::default(),
            logging: LogConfig::default(),
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::load_from_string(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn load_from_string(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "Failed to parse TOML configuration")?;

        config
            .coefficients
            .validate()
            .with_context(|| "Invalid nutrition coefficients")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        // Update modification timestamp
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fuelrs")
            .join("config.toml")
    }

    /// Load the config at `path`, or defaults when no file exists there.
    ///
    /// A file that exists but cannot be read, parsed or validated is an error.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Load the default config file, or defaults when it does not exist
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(Self::default_config_path())
    }

    /// Write a default configuration file, refusing to replace one unless `force`
    pub fn write_default<P: AsRef<Path>>(path: P, force: bool) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() && !force {
            anyhow::bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        let mut config = Self::default();
        config.save_to_file(path)?;
        Ok(config)
    }
}
