//! Tests that drive the `fuelrs` binary end to end

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use fuelrs::AppConfig;
use tempfile::{tempdir, TempDir};

/// Run the binary with `home` as the user's home directory
fn fuelrs(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fuelrs"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fuelrs")
}

/// Home directory with `~/.fuelrs/config.toml` holding `content`
fn home_with_config(content: &str) -> TempDir {
    let home = tempdir().unwrap();
    let config_dir = home.path().join(".fuelrs");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
    home
}

fn total_calories(output: &Output) -> f64 {
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    report["total_daily_calories"].as_f64().unwrap()
}

#[test]
fn test_config_init_creates_missing_file() {
    let home = tempdir().unwrap();
    let config_path = home.path().join("nested").join("fuelrs.toml");
    let config_arg = config_path.to_str().unwrap();

    let output = fuelrs(home.path(), &["--config", config_arg, "config", "--init"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_path.exists());

    let written = AppConfig::load_from_file(&config_path).unwrap();
    assert_eq!(written.coefficients, fuelrs::NutritionCoefficients::default());
}

#[test]
fn test_config_init_refuses_to_overwrite_without_force() {
    let home = tempdir().unwrap();
    let config_path = home.path().join("fuelrs.toml");
    let config_arg = config_path.to_str().unwrap();

    assert!(fuelrs(home.path(), &["--config", config_arg, "config", "--init"])
        .status
        .success());

    let again = fuelrs(home.path(), &["--config", config_arg, "config", "--init"]);
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));

    let forced = fuelrs(
        home.path(),
        &["--config", config_arg, "config", "--init", "--force", "--show"],
    );
    assert!(forced.status.success());
    assert!(String::from_utf8_lossy(&forced.stdout).contains("[coefficients]"));
}

#[test]
fn test_config_init_writes_default_home_file() {
    let home = tempdir().unwrap();

    let output = fuelrs(home.path(), &["config", "--init"]);
    assert!(output.status.success());

    let config_path = home.path().join(".fuelrs").join("config.toml");
    assert!(AppConfig::load_from_file(config_path).is_ok());
}

#[test]
fn test_home_config_with_only_coefficients_is_applied() {
    let home = home_with_config("[coefficients]\ntraining_kcal_per_hour = 300.0\n");

    let output = fuelrs(home.path(), &["calculate", "--format", "json"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // 1648.75 × 1.55 × 1.2 + 5 h × 300 kcal
    assert!((total_calories(&output) - 4566.675).abs() < 1e-6);
}

#[test]
fn test_missing_home_config_uses_defaults() {
    let home = tempdir().unwrap();

    let output = fuelrs(home.path(), &["calculate", "--format", "json"]);
    assert!(output.status.success());
    assert!((total_calories(&output) - 4066.675).abs() < 1e-6);
}

#[test]
fn test_invalid_home_config_fails_loudly() {
    let home = home_with_config("[coefficients]\ntraining_kcal_per_hour = -5.0\n");

    let output = fuelrs(home.path(), &["calculate", "--format", "json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config.toml"));
    assert!(stderr.contains("training_kcal_per_hour"));
}

#[test]
fn test_unparsable_home_config_fails_loudly() {
    let home = home_with_config("[coefficients\n");

    let output = fuelrs(home.path(), &["tips"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse TOML"));
}

#[test]
fn test_out_of_range_input_exits_with_code_two() {
    let home = tempdir().unwrap();

    let output = fuelrs(home.path(), &["calculate", "--weight", "12"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("weight kg"));
}

#[test]
fn test_guide_lists_food_sources() {
    let home = tempdir().unwrap();

    let output = fuelrs(home.path(), &["guide"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for nutrient in ["Protein", "Carbohydrate", "Fat", "Hydration"] {
        assert!(stdout.contains(nutrient));
    }
    assert!(stdout.contains("sweet potato"));
}
