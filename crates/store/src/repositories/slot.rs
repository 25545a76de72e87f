use std::sync::Arc;

use alleybook_core::{
    errors::StoreError, models::slot::SlotDefinition, repositories::SlotRepository,
};
use async_trait::async_trait;

use crate::{
    airtable::{AirtableClient, ListQuery},
    formula,
    models::AvailabilityFields,
};

/// Column the slot table is sorted on. Airtable compares it as text.
pub const START_TIME_FIELD: &str = "Start Time";

pub struct AirtableSlotRepository {
    client: Arc<AirtableClient>,
    table: String,
}

impl AirtableSlotRepository {
    pub fn new(client: Arc<AirtableClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl SlotRepository for AirtableSlotRepository {
    async fn available_slots(
        &self,
        date: &str,
        service_id: &str,
    ) -> Result<Vec<SlotDefinition>, StoreError> {
        let query = ListQuery {
            filter_by_formula: formula::available_slots(date, service_id),
            sort_ascending_by: Some(START_TIME_FIELD),
        };

        let records = self
            .client
            .list_records::<AvailabilityFields>(&self.table, &query)
            .await?;

        Ok(records
            .into_iter()
            .map(|record| record.into_slot_definition(date, service_id))
            .collect())
    }
}
