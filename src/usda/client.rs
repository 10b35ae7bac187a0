//! FoodData Central HTTP client
//!
//! A small blocking client; one search request per lookup.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use super::search::{record_from_search, SearchResponse};
use crate::config::UsdaConfig;
use crate::models::NutrientRecord;
use crate::nutrition::NutritionError;

/// Food lookup error types
#[derive(Debug, Error)]
pub enum UsdaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FoodData Central returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("No API key configured (set USDA_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("Unusable food record: {0}")]
    InvalidRecord(#[from] NutritionError),
}

/// Result type for food lookups
pub type UsdaResult<T> = Result<T, UsdaError>;

/// Anything that can turn a text query into a nutrient record
pub trait FoodSource {
    /// Best match for the query, None when nothing matched
    fn search_first(&self, query: &str) -> UsdaResult<Option<NutrientRecord>>;
}

/// Blocking FoodData Central client
#[derive(Clone)]
pub struct UsdaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl UsdaClient {
    /// Build a client from configuration; fails without an API key
    pub fn new(config: &UsdaConfig) -> UsdaResult<Self> {
        let api_key = config.api_key.clone().ok_or(UsdaError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl FoodSource for UsdaClient {
    fn search_first(&self, query: &str) -> UsdaResult<Option<NutrientRecord>> {
        let url = format!("{}/foods/search", self.base_url);
        tracing::info!("Searching FoodData Central for '{}'", query);

        let res = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("pageSize", "1"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().unwrap_or_default();
            return Err(UsdaError::Status { status, body });
        }

        let response: SearchResponse = res.json()?;
        let record = record_from_search(response)?;

        match &record {
            Some(r) => tracing::info!("'{}' matched '{}' (fdc {})", query, r.description(), r.food_id()),
            None => tracing::info!("No foods found for '{}'", query),
        }

        Ok(record)
    }
}
