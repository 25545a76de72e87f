//! # alleybook store
//!
//! Airtable-backed implementations of the repository traits in
//! `alleybook-core`.

pub mod airtable;
pub mod formula;
pub mod models;
pub mod repositories;

use std::sync::Arc;

use eyre::Result;

use airtable::{AirtableClient, AirtableConfig};
use repositories::{booking::AirtableBookingRepository, slot::AirtableSlotRepository};

pub fn create_client(config: &AirtableConfig) -> Result<AirtableClient> {
    AirtableClient::new(config)
}

/// Builds both repositories over one shared client.
pub fn create_repositories(
    client: AirtableClient,
    config: &AirtableConfig,
) -> (AirtableSlotRepository, AirtableBookingRepository) {
    let client = Arc::new(client);
    (
        AirtableSlotRepository::new(client.clone(), &config.availability_table),
        AirtableBookingRepository::new(client, &config.bookings_table),
    )
}
