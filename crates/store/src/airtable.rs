//! # Airtable Client
//!
//! Thin wrapper over Airtable's REST "list records" endpoint. Each call sends
//! a `filterByFormula` expression and an optional single-field sort, then
//! follows the `offset` cursor until every page has been read.

use alleybook_core::errors::StoreError;
use eyre::{bail, Result, WrapErr};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{AirtableRecord, ListResponse};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_AVAILABILITY_TABLE: &str = "Availability";
pub const DEFAULT_BOOKINGS_TABLE: &str = "Bookings";

/// Connection settings for the Airtable base holding slots and bookings.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// Personal access token, sent as a bearer token
    pub api_key: String,

    /// Base identifier, e.g. `appXXXXXXXXXXXXXX`
    pub base_id: String,

    /// API root; overridden in tests to point at a local server
    pub api_url: String,

    /// Table holding slot definitions
    pub availability_table: String,

    /// Table holding bookings
    pub bookings_table: String,
}

impl AirtableConfig {
    pub fn new(api_key: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_id: base_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            availability_table: DEFAULT_AVAILABILITY_TABLE.to_string(),
            bookings_table: DEFAULT_BOOKINGS_TABLE.to_string(),
        }
    }
}

/// Parameters for one list-records call.
#[derive(Debug, Clone)]
pub struct ListQuery<'a> {
    pub filter_by_formula: String,
    pub sort_ascending_by: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    api_url: Url,
    base_id: String,
    api_key: String,
}

impl AirtableClient {
    pub fn new(config: &AirtableConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)
            .wrap_err_with(|| format!("Invalid Airtable API URL: {}", config.api_url))?;
        if api_url.cannot_be_a_base() {
            bail!("Airtable API URL cannot carry a path: {}", config.api_url);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("alleybook/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url,
            base_id: config.base_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// `{api_url}/{base_id}/{table}` with each segment percent-encoded.
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.base_id).push(table);
        }
        url
    }

    /// Lists every record of `table` that matches `query`.
    ///
    /// A non-success status ends the listing with `StoreError::Rejected`, even
    /// when earlier pages were read fine.
    pub async fn list_records<F>(
        &self,
        table: &str,
        query: &ListQuery<'_>,
    ) -> Result<Vec<AirtableRecord<F>>, StoreError>
    where
        F: DeserializeOwned + Default,
    {
        let url = self.table_url(table);
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut params: Vec<(&str, &str)> =
                vec![("filterByFormula", query.filter_by_formula.as_str())];
            if let Some(field) = query.sort_ascending_by {
                params.push(("sort[0][field]", field));
                params.push(("sort[0][direction]", "asc"));
            }
            if let Some(offset) = offset.as_deref() {
                params.push(("offset", offset));
            }

            debug!(table, formula = %query.filter_by_formula, "listing Airtable records");

            let response = self
                .http
                .get(url.clone())
                .bearer_auth(&self.api_key)
                .query(&params)
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.into()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| StoreError::Transport(e.into()))?;

            if !status.is_success() {
                return Err(StoreError::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: ListResponse<F> =
                serde_json::from_str(&body).map_err(|e| StoreError::Malformed(e.into()))?;
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(records)
    }
}
