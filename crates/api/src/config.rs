//! # API Configuration Module
//!
//! Loads settings for the availability server from environment variables,
//! with defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Whole-request timeout (default: 30)
//! - `SLOT_ORDER`: `lexicographic` (default) or `chronological`
//! - `AIRTABLE_API_KEY`: Airtable access token (required)
//! - `AIRTABLE_BASE_ID`: Airtable base holding slots and bookings (required)
//! - `AIRTABLE_API_URL`: API root (default: "https://api.airtable.com/v0")
//! - `AIRTABLE_AVAILABILITY_TABLE`: Slot table name (default: "Availability")
//! - `AIRTABLE_BOOKINGS_TABLE`: Booking table name (default: "Bookings")

use std::{env, time::Duration};

use alleybook_core::ordering::SlotOrder;
use alleybook_store::airtable::AirtableConfig;
use eyre::{eyre, Result, WrapErr};
use tracing::Level;

/// Configuration for the availability server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use alleybook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Ordering applied to resolved slots
    pub slot_order: SlotOrder,

    /// Record store connection settings
    pub airtable: AirtableConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from the process environment
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `AIRTABLE_API_KEY` or `AIRTABLE_BASE_ID` is not set
    /// - The `API_PORT` value cannot be parsed as a u16
    /// - The `SLOT_ORDER` value is not a known ordering
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a new ApiConfig from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // Network settings
        let host = var_or("API_HOST", "0.0.0.0");
        let port = var_or("API_PORT", "3000")
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match var_or("LOG_LEVEL", "info").as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Performance settings
        let request_timeout = var_or("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .unwrap_or(30);

        let slot_order = lookup("SLOT_ORDER")
            .map(|raw| raw.parse::<SlotOrder>())
            .transpose()
            .wrap_err("Invalid SLOT_ORDER value")?
            .unwrap_or_default();

        // Record store settings
        let api_key = lookup("AIRTABLE_API_KEY")
            .ok_or_else(|| eyre!("AIRTABLE_API_KEY environment variable must be set"))?;
        let base_id = lookup("AIRTABLE_BASE_ID")
            .ok_or_else(|| eyre!("AIRTABLE_BASE_ID environment variable must be set"))?;

        let defaults = AirtableConfig::new(api_key, base_id);
        let airtable = AirtableConfig {
            api_url: var_or("AIRTABLE_API_URL", &defaults.api_url),
            availability_table: var_or("AIRTABLE_AVAILABILITY_TABLE", &defaults.availability_table),
            bookings_table: var_or("AIRTABLE_BOOKINGS_TABLE", &defaults.bookings_table),
            ..defaults
        };

        Ok(Self {
            host,
            port,
            log_level,
            request_timeout,
            slot_order,
            airtable,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
