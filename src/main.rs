//! Nutrition Calculator (nutricalc)
//!
//! Interactive food lookup and daily intake comparison.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use nutricalc::build_info;
use nutricalc::cli::App;
use nutricalc::config::Config;
use nutricalc::nutrition::TargetCalculator;
use nutricalc::usda::{UsdaClient, UsdaError};

fn main() -> anyhow::Result<()> {
    // Log to stderr so prompts and results on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutricalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env().context("Failed to load configuration")?;

    let source = match UsdaClient::new(&config.usda) {
        Ok(client) => Some(client),
        Err(UsdaError::MissingApiKey) => {
            tracing::warn!("No API key configured; food lookups are disabled");
            None
        }
        Err(e) => return Err(e).context("Failed to build FoodData Central client"),
    };

    let calculator = TargetCalculator::new(config.targets);

    App::new(source, calculator).run()
}
