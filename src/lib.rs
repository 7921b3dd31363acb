// Library interface for FuelRS modules
// The CLI and integration tests both go through this crate root

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod report;
pub mod validation;

// Re-export commonly used types for convenience
pub use models::*;
pub use nutrition::{MacroRatios, NutritionCalculator, Recommendation};
pub use config::{AppConfig, NutritionCoefficients};
pub use validation::InputValidator;
pub use error::{FuelError, Result, ValidationError};
pub use logging::{LogConfig, LogFormat, LogLevel};
