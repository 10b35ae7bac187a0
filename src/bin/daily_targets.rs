//! Print daily targets for a profile given on the command line
//! Usage: cargo run --bin daily_targets -- <weight_kg> <height_cm> <age> <male|female> <activity>
//!        cargo run --bin daily_targets -- --version [--json]

use anyhow::{bail, Context};

use nutricalc::build_info::BuildInfo;
use nutricalc::config::Config;
use nutricalc::models::{ActivityLevel, Sex, UserProfile};
use nutricalc::nutrition::TargetCalculator;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--version") {
        let info = BuildInfo::current();
        if args.iter().any(|a| a == "--json") {
            println!("{}", serde_json::to_string_pretty(&info)?);
        } else {
            println!("{}", info.version_line());
        }
        return Ok(());
    }
    if args.len() < 5 {
        bail!("usage: daily_targets <weight_kg> <height_cm> <age> <male|female> <activity level>");
    }

    let weight_kg: f64 = args[0].parse().context("weight must be a number (kg)")?;
    let height_cm: f64 = args[1].parse().context("height must be a number (cm)")?;
    let age_years: u32 = args[2].parse().context("age must be a whole number")?;
    let sex: Sex = args[3].parse()?;
    // "very active" may arrive as two arguments
    let activity_level: ActivityLevel = args[4..].join(" ").parse()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    let calculator = TargetCalculator::new(config.targets);

    let profile = UserProfile {
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_level,
    };
    let targets = calculator.targets(&profile)?;

    println!("{}", serde_json::to_string_pretty(&targets)?);
    Ok(())
}
