//! # Availability Resolver
//!
//! Works out which of a day's slots can still be booked for a service.
//!
//! Two record sets feed the answer:
//!
//! 1. Slot definitions, which carry the authoritative `capacity` and
//!    `booked_spots` counts.
//! 2. Active bookings, whose time labels veto any slot starting at the same
//!    label, whatever the counts say.
//!
//! The slot lookup is mandatory. The booking lookup is advisory: if the store
//! rejects it, slots are resolved on capacity alone.

use std::{collections::HashSet, sync::Arc};

use tracing::{debug, warn};

use crate::{
    errors::{AlleyError, AlleyResult, StoreError},
    models::{
        availability::{Availability, AvailabilityRequest},
        booking::BookingRecord,
        slot::{ResolvedSlot, SlotDefinition},
    },
    ordering::SlotOrder,
    repositories::{BookingRepository, SlotRepository},
};

pub struct AvailabilityResolver {
    slots: Arc<dyn SlotRepository>,
    bookings: Arc<dyn BookingRepository>,
    order: SlotOrder,
}

impl AvailabilityResolver {
    pub fn new(
        slots: Arc<dyn SlotRepository>,
        bookings: Arc<dyn BookingRepository>,
        order: SlotOrder,
    ) -> Self {
        Self {
            slots,
            bookings,
            order,
        }
    }

    /// Resolves the slots for one date and service.
    ///
    /// # Errors
    ///
    /// * `AlleyError::UpstreamUnavailable` - the store rejected the slot lookup
    /// * `AlleyError::Internal` - either lookup failed in transport or returned
    ///   a body that could not be decoded
    pub async fn resolve(&self, request: &AvailabilityRequest) -> AlleyResult<Availability> {
        let definitions = self
            .slots
            .available_slots(&request.date, &request.service_id)
            .await
            .map_err(|err| match err {
                err @ StoreError::Rejected { .. } => AlleyError::UpstreamUnavailable(err),
                other => AlleyError::unexpected(other),
            })?;

        let bookings = match self
            .bookings
            .active_bookings(&request.date, &request.service_id)
            .await
        {
            Ok(bookings) => bookings,
            Err(err @ StoreError::Rejected { .. }) => {
                warn!(
                    date = %request.date,
                    service_id = %request.service_id,
                    error = %err,
                    "booking lookup rejected, resolving on capacity alone"
                );
                Vec::new()
            }
            Err(other) => return Err(AlleyError::unexpected(other)),
        };

        debug!(
            date = %request.date,
            service_id = %request.service_id,
            definitions = definitions.len(),
            bookings = bookings.len(),
            "resolving availability"
        );

        let mut slots = resolve_slots(definitions, &bookings);
        self.order.apply(&mut slots);

        Ok(Availability {
            date: request.date.clone(),
            service_id: request.service_id.clone(),
            slots,
        })
    }
}

/// Annotates each definition with its availability.
///
/// A slot is available when no booking's `time_slot` equals its `start_time`
/// exactly and its booked count is below capacity. Definition order is kept.
pub fn resolve_slots(
    definitions: Vec<SlotDefinition>,
    bookings: &[BookingRecord],
) -> Vec<ResolvedSlot> {
    let occupied: HashSet<&str> = bookings
        .iter()
        .filter_map(|booking| booking.time_slot.as_deref())
        .collect();

    definitions
        .into_iter()
        .map(|definition| {
            let capacity = definition.capacity();
            let booked = definition.booked();
            let vetoed = definition
                .start_time
                .as_deref()
                .is_some_and(|start| occupied.contains(start));

            ResolvedSlot {
                id: definition.id,
                start_time: definition.start_time,
                end_time: definition.end_time,
                capacity,
                booked,
                is_available: !vetoed && booked < capacity,
            }
        })
        .collect()
}
