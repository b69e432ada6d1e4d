use clap::{Parser, Subcommand};
use kcal_core::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kcal")]
#[command(about = "Daily calorie needs estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate BMR and daily calorie needs from a biometric profile
    Needs {
        /// Age in years
        #[arg(long)]
        age: i64,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Sex (male, female)
        #[arg(long)]
        sex: String,

        /// Activity level (run `kcal levels` for the accepted values)
        #[arg(long)]
        activity: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List activity levels and their multipliers
    Levels,
}

/// Full report emitted by `needs --json`
#[derive(Serialize)]
struct NeedsReport {
    profile: Profile,
    result: MetabolicResult,
    targets: CalorieTargets,
}

fn main() -> Result<()> {
    // Warn by default keeps stdout machine-readable for --json;
    // RUST_LOG still raises the level
    kcal_core::logging::init("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Needs {
            age,
            weight,
            height,
            sex,
            activity,
            json,
        } => cmd_needs(age, weight, height, sex, activity, json, &config),
        Commands::Levels => cmd_levels(),
    }
}

fn cmd_needs(
    age: i64,
    weight: f64,
    height: f64,
    sex: String,
    activity: String,
    json: bool,
    config: &Config,
) -> Result<()> {
    let raw = RawProfile {
        age,
        weight,
        height,
        sex,
        activity_level: activity,
    };

    let profile = match validate(&raw) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Invalid profile: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Computing calorie needs for {} profile at {}",
        profile.sex,
        profile.activity_level
    );

    let result = compute_metabolics(&profile);
    let targets = calorie_targets(&result, &config.targets);

    if json {
        let report = NeedsReport {
            profile,
            result,
            targets,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_needs(&profile, &result, &targets);
    Ok(())
}

fn cmd_levels() -> Result<()> {
    println!("\nActivity levels:\n");

    for level in ActivityLevel::ALL {
        println!(
            "  {:<18} x{:<6} {}",
            level.as_str(),
            level.multiplier(),
            level.description()
        );
    }

    println!();
    Ok(())
}

fn display_needs(profile: &Profile, result: &MetabolicResult, targets: &CalorieTargets) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY CALORIE NEEDS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Profile: {}, {} years, {:.1} kg, {:.1} cm",
        profile.sex, profile.age, profile.weight_kg, profile.height_cm
    );
    println!(
        "  Activity: {} (x{})",
        profile.activity_level,
        profile.activity_level.multiplier()
    );
    println!();
    println!("  BMR:         {:.2} kcal/day", result.bmr);
    println!("  Maintenance: {:.2} kcal/day", result.daily_calorie_need);
    println!();
    println!("  → Weight loss: {:.0} kcal/day", targets.weight_loss);
    println!("  → Weight gain: {:.0} kcal/day", targets.weight_gain);
    println!();
}
