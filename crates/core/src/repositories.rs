//! Capabilities the resolver needs from a record store.
//!
//! Adapters translate these calls into whatever query language their store
//! speaks. The resolver never sees table or field names.

use async_trait::async_trait;

use crate::{
    errors::StoreError,
    models::{booking::BookingRecord, slot::SlotDefinition},
};

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Slot definitions for `date` and `service_id` whose status is
    /// [`AVAILABLE_STATUS`](crate::models::slot::AVAILABLE_STATUS), in
    /// ascending start-time order as the store sorts it.
    async fn available_slots(
        &self,
        date: &str,
        service_id: &str,
    ) -> Result<Vec<SlotDefinition>, StoreError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings for `date` and `service_id` whose status is one of
    /// [`BookingStatus::HOLDING`](crate::models::booking::BookingStatus::HOLDING).
    async fn active_bookings(
        &self,
        date: &str,
        service_id: &str,
    ) -> Result<Vec<BookingRecord>, StoreError>;
}
