//! Configuration module
//!
//! Settings for the bill store backend and the connected user, read from the
//! environment (and an optional `.env` file).

use std::env;
use std::time::Duration;

use crate::store_types::StoreBackend;

const DEFAULT_API_URL: &str = "http://localhost:5678";
const DEFAULT_MEMORY_BASE_URL: &str = "http://localhost:5678/public";
const STORE_TIMEOUT_SECS: u64 = 60;

/// Application configuration
#[derive(Clone, Debug)]
pub struct BilledConfig {
    pub environment: String,
    pub store_backend: StoreBackend,
    /// Base URL of the HTTP bill API (without the `/bills` suffix)
    pub api_url: String,
    pub store_timeout_secs: u64,
    /// Base URL used by the in-memory store when minting receipt URLs
    pub memory_store_base_url: String,
    /// Email of the connected employee, attached to uploads and bills
    pub user_email: Option<String>,
}

impl Default for BilledConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            store_backend: StoreBackend::Http,
            api_url: DEFAULT_API_URL.to_string(),
            store_timeout_secs: STORE_TIMEOUT_SECS,
            memory_store_base_url: DEFAULT_MEMORY_BASE_URL.to_string(),
            user_email: None,
        }
    }
}

impl BilledConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let store_backend = env::var("STORE_BACKEND")
            .ok()
            .map(|s| s.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or(StoreBackend::Http);

        let api_url = env::var("BILLED_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let store_timeout_secs = env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| STORE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("STORE_TIMEOUT_SECS must be a number of seconds: {}", e))?;

        Ok(Self {
            environment,
            store_backend,
            api_url,
            store_timeout_secs,
            memory_store_base_url: env::var("MEMORY_STORE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MEMORY_BASE_URL.to_string()),
            user_email: env::var("BILLED_USER_EMAIL").ok().filter(|e| !e.is_empty()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.store_timeout_secs == 0 {
            return Err(anyhow::anyhow!("STORE_TIMEOUT_SECS must be greater than 0"));
        }

        if self.store_backend == StoreBackend::Http
            && !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "BILLED_API_URL must be an http(s) URL when using the http store backend"
            ));
        }

        Ok(())
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}
