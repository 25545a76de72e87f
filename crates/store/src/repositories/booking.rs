use std::sync::Arc;

use alleybook_core::{
    errors::StoreError, models::booking::BookingRecord, repositories::BookingRepository,
};
use async_trait::async_trait;

use crate::{
    airtable::{AirtableClient, ListQuery},
    formula,
    models::BookingFields,
};

pub struct AirtableBookingRepository {
    client: Arc<AirtableClient>,
    table: String,
}

impl AirtableBookingRepository {
    pub fn new(client: Arc<AirtableClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl BookingRepository for AirtableBookingRepository {
    async fn active_bookings(
        &self,
        date: &str,
        service_id: &str,
    ) -> Result<Vec<BookingRecord>, StoreError> {
        let query = ListQuery {
            filter_by_formula: formula::active_bookings(date, service_id),
            sort_ascending_by: None,
        };

        let records = self
            .client
            .list_records::<BookingFields>(&self.table, &query)
            .await?;

        // Records can change status between pages.
        Ok(records
            .into_iter()
            .map(|record| record.into_booking_record(date, service_id))
            .filter(|booking| booking.status.holds_slot())
            .collect())
    }
}
