use async_trait::async_trait;
use mockall::mock;

use crate::{
    errors::StoreError,
    models::{booking::BookingRecord, slot::SlotDefinition},
    repositories::{BookingRepository, SlotRepository},
};

// Mock repositories for testing
mock! {
    pub SlotRepo {}

    #[async_trait]
    impl SlotRepository for SlotRepo {
        async fn available_slots(
            &self,
            date: &str,
            service_id: &str,
        ) -> Result<Vec<SlotDefinition>, StoreError>;
    }
}

mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingRepository for BookingRepo {
        async fn active_bookings(
            &self,
            date: &str,
            service_id: &str,
        ) -> Result<Vec<BookingRecord>, StoreError>;
    }
}
