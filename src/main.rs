use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use fuelrs::logging::{init_logging, LogLevel};
use fuelrs::report::{self, ReportFormat};
use fuelrs::{
    ActivityLevel, AppConfig, AthleteProfile, Goal, NutritionCalculator, Sex, TrainingIntensity,
    TrainingLoad,
};

/// FuelRS - Nutrition needs calculator for runners
///
/// Computes daily energy, macronutrient and hydration targets from an
/// athlete profile, a weekly training load and a nutrition goal.
#[derive(Parser)]
#[command(name = "fuelrs")]
#[command(author = "FuelRS Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Nutrition needs calculator for runners", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate daily nutrition targets
    Calculate {
        /// Body weight in kg (30-200)
        #[arg(short, long)]
        weight: Option<f64>,

        /// Height in cm (100-250)
        #[arg(long)]
        height: Option<f64>,

        /// Age in years (16-100)
        #[arg(short, long)]
        age: Option<u32>,

        /// male or female
        #[arg(short, long)]
        sex: Option<Sex>,

        /// sedentary, light, moderate, active, very_active
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// low, medium, high
        #[arg(short, long)]
        intensity: Option<TrainingIntensity>,

        /// Training minutes per week (0-1680)
        #[arg(short, long)]
        minutes: Option<u32>,

        /// maintenance, weight_loss, muscle_gain, performance
        #[arg(short, long)]
        goal: Option<Goal>,

        /// Output format (table, json)
        #[arg(short = 'f', long, default_value = "table")]
        format: ReportFormat,
    },

    /// List accepted activity levels, intensities and goals
    Options,

    /// Show general fueling tips
    Tips,

    /// Show what each macronutrient and hydration is for, with food sources
    Guide,

    /// Manage the configuration file
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,

        /// Print the active configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config --init` creates the file, so there is nothing to load yet
    let writes_config = matches!(cli.command, Commands::Config { init: true, .. });

    let mut config = match &cli.config {
        _ if writes_config => AppConfig::default(),
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load_or_default()?,
    };

    config.logging.level = LogLevel::from_verbosity(config.logging.level, cli.verbose);
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Calculate {
            weight,
            height,
            age,
            sex,
            activity,
            intensity,
            minutes,
            goal,
            format,
        } => {
            let defaults = &config.defaults;
            let profile = AthleteProfile {
                weight_kg: weight.unwrap_or(defaults.profile.weight_kg),
                height_cm: height.unwrap_or(defaults.profile.height_cm),
                age_years: age.unwrap_or(defaults.profile.age_years),
                sex: sex.unwrap_or(defaults.profile.sex),
            };
            let load = TrainingLoad {
                activity_level: activity.unwrap_or(defaults.load.activity_level),
                training_intensity: intensity.unwrap_or(defaults.load.training_intensity),
                weekly_training_minutes: minutes.unwrap_or(defaults.load.weekly_training_minutes),
            };
            let goal = goal.unwrap_or(defaults.goal);

            tracing::info!(?profile, ?load, %goal, "Calculating nutrition targets");

            let targets = match NutritionCalculator::calculate_with(
                &config.coefficients,
                &profile,
                &load,
                goal,
            ) {
                Ok(targets) => targets,
                Err(e) => {
                    eprintln!("{} {}", "✗".red().bold(), e.user_message());
                    std::process::exit(2);
                }
            };

            if format == ReportFormat::Table {
                println!(
                    "{}",
                    format!(
                        "{} kg, {} cm, {} y, {} | {} activity, {} intensity, {} min/week | {}",
                        profile.weight_kg,
                        profile.height_cm,
                        profile.age_years,
                        profile.sex,
                        load.activity_level,
                        load.training_intensity,
                        load.weekly_training_minutes,
                        goal.label()
                    )
                    .dimmed()
                );
                println!();
            }

            println!("{}", report::render(&targets, format, &config.coefficients)?);
        }

        Commands::Options => {
            print!("{}", report::render_options());
        }

        Commands::Tips => {
            println!("{}", report::render_tips());
        }

        Commands::Guide => {
            println!("{}", report::render_guide());
        }

        Commands::Config { init, force, show } => {
            let path = cli.config.clone().unwrap_or_else(AppConfig::default_config_path);

            if init {
                config = AppConfig::write_default(&path, force)?;
                println!("{} {}", "✓ Wrote default configuration to".green(), path.display());
            }

            if show || !init {
                let rendered = toml::to_string_pretty(&config)
                    .with_context(|| "Failed to serialize configuration to TOML")?;
                println!("{}", format!("# {}", path.display()).dimmed());
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}
