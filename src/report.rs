//! Terminal and JSON rendering of nutrition targets

use colored::*;
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

use crate::config::NutritionCoefficients;
use crate::error::Result;
use crate::models::{ActivityLevel, Goal, NutritionTargets, TrainingIntensity};

/// Output format for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

/// General fueling advice, independent of the athlete
pub struct FuelingTip {
    pub title: &'static str,
    pub advice: &'static str,
}

pub const FUELING_TIPS: [FuelingTip; 4] = [
    FuelingTip {
        title: "Pre-training",
        advice: "Eat complex carbohydrates 2-3 hours before the session to top up energy stores.",
    },
    FuelingTip {
        title: "Post-training",
        advice: "Recover with a 3:1 carbohydrate to protein ratio within 30 minutes of finishing.",
    },
    FuelingTip {
        title: "Hydration",
        advice: "Drink 500 ml of water 2 hours before, then 150-250 ml every 15-20 minutes \
                 of effort.",
    },
    FuelingTip {
        title: "Recovery",
        advice: "Antioxidants and electrolytes are essential for a full recovery.",
    },
];

/// What a nutrient does for a runner and where to find it
pub struct NutrientGuide {
    pub nutrient: &'static str,
    pub role: &'static str,
    pub sources: &'static [&'static str],
}

pub const NUTRIENT_GUIDE: [NutrientGuide; 4] = [
    NutrientGuide {
        nutrient: "Protein",
        role: "Essential for muscle recovery.",
        sources: &["legumes", "quinoa", "nuts"],
    },
    NutrientGuide {
        nutrient: "Carbohydrate",
        role: "The main fuel for the effort. Favour complex carbohydrates.",
        sources: &["oats", "sweet potato", "quinoa"],
    },
    NutrientGuide {
        nutrient: "Fat",
        role: "Needed to absorb vitamins.",
        sources: &["avocado", "nuts", "seeds", "olive oil"],
    },
    NutrientGuide {
        nutrient: "Hydration",
        role: "Crucial for performance.",
        sources: &["water", "electrolyte drinks", "water-rich fruit and vegetables"],
    },
];

#[derive(Tabled)]
struct MacroRow {
    #[tabled(rename = "Macronutrient")]
    name: &'static str,
    #[tabled(rename = "Grams")]
    grams: u32,
    #[tabled(rename = "kcal")]
    kcal: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct HydrationRow {
    #[tabled(rename = "Target")]
    name: &'static str,
    #[tabled(rename = "Daily amount")]
    amount: String,
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// Render targets in the requested format
pub fn render(
    targets: &NutritionTargets,
    format: ReportFormat,
    coefficients: &NutritionCoefficients,
) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(targets, coefficients)),
        ReportFormat::Json => render_json(targets),
    }
}

pub fn render_json(targets: &NutritionTargets) -> Result<String> {
    Ok(serde_json::to_string_pretty(targets)?)
}

/// Human-readable report with energy, macro, hydration and guidance sections
pub fn render_table(targets: &NutritionTargets, coefficients: &NutritionCoefficients) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Daily energy".bold()));
    out.push_str(&format!(
        "  Total: {} kcal\n",
        format!("{:.0}", targets.total_daily_calories).green().bold()
    ));
    out.push_str(&format!(
        "  Basal metabolic rate: {:.0} kcal\n\n",
        targets.basal_metabolic_rate
    ));

    let macros = &targets.macronutrients;
    let rows = [
        ("Protein", macros.protein_grams, coefficients.kcal_per_gram_protein),
        ("Carbohydrate", macros.carbohydrate_grams, coefficients.kcal_per_gram_carbohydrate),
        ("Fat", macros.fat_grams, coefficients.kcal_per_gram_fat),
    ]
    .into_iter()
    .map(|(name, grams, kcal_per_gram)| {
        let kcal = grams as f64 * kcal_per_gram;
        MacroRow {
            name,
            grams,
            kcal: format!("{:.0}", kcal),
            share: share_of(kcal, targets.total_daily_calories),
        }
    })
    .collect::<Vec<_>>();

    out.push_str(&format!("{}\n", "Macronutrients".bold()));
    out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    out.push_str("\n\n");

    let hydration = &targets.hydration;
    let rows = vec![
        HydrationRow { name: "Water", amount: format!("{} ml", hydration.water_ml) },
        HydrationRow { name: "Sodium", amount: format!("{} mg", hydration.sodium_mg) },
        HydrationRow { name: "Potassium", amount: format!("{} mg", hydration.potassium_mg) },
        HydrationRow { name: "Magnesium", amount: format!("{} mg", hydration.magnesium_mg) },
    ];

    out.push_str(&format!("{}\n", "Hydration and electrolytes".bold()));
    out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    out.push('\n');

    if !targets.recommendations.is_empty() {
        out.push_str(&format!("\n{}\n", "Recommendations".bold()));
        for (i, recommendation) in targets.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, recommendation));
        }
    }

    out
}

fn share_of(kcal: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.0}%", kcal / total * 100.0)
    } else {
        "-".to_string()
    }
}

/// Tables of every accepted activity level, intensity and goal
pub fn render_options() -> String {
    let activity = ActivityLevel::ALL
        .iter()
        .map(|level| OptionRow {
            value: level.to_string(),
            label: level.label(),
            factor: format!("×{}", level.multiplier()),
            description: "",
        })
        .collect::<Vec<_>>();

    let intensity = TrainingIntensity::ALL
        .iter()
        .map(|intensity| OptionRow {
            value: intensity.to_string(),
            label: intensity.label(),
            factor: format!("×{}", intensity.multiplier()),
            description: "",
        })
        .collect::<Vec<_>>();

    let goals = Goal::ALL
        .iter()
        .map(|goal| OptionRow {
            value: goal.to_string(),
            label: goal.label(),
            factor: format!("×{}", goal.calorie_factor()),
            description: goal.description(),
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    for (title, rows) in [
        ("Activity levels", activity),
        ("Training intensities", intensity),
        ("Goals", goals),
    ] {
        out.push_str(&format!("{}\n", title.bold()));
        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push_str("\n\n");
    }

    out
}

pub fn render_tips() -> String {
    FUELING_TIPS
        .iter()
        .map(|tip| format!("{}\n  {}\n", tip.title.bold().cyan(), tip.advice))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Role and food sources of each macronutrient and of hydration
pub fn render_guide() -> String {
    NUTRIENT_GUIDE
        .iter()
        .map(|entry| {
            format!(
                "{}\n  {}\n  Sources: {}\n",
                entry.nutrient.bold().cyan(),
                entry.role,
                entry.sources.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
