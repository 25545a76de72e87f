use serde::{Deserialize, Serialize};

use crate::{
    errors::{AlleyError, AlleyResult},
    models::slot::ResolvedSlot,
};

/// A validated availability lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub date: String,
    pub service_id: String,
}

impl AvailabilityRequest {
    /// Query parameter names a lookup cannot do without.
    pub const REQUIRED: [&'static str; 2] = ["date", "serviceId"];

    /// Builds a request from raw query values.
    ///
    /// Absent and empty values are both rejected. Nothing else is checked:
    /// a malformed date or an unknown service goes through to the store as is.
    pub fn new(date: Option<String>, service_id: Option<String>) -> AlleyResult<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        match (present(date), present(service_id)) {
            (Some(date), Some(service_id)) => Ok(Self { date, service_id }),
            _ => Err(AlleyError::MissingParameters {
                required: Self::REQUIRED.to_vec(),
            }),
        }
    }
}

/// Outcome of a lookup: the resolved slots for one date and service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub date: String,
    pub service_id: String,
    pub slots: Vec<ResolvedSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub success: bool,
    pub date: String,
    pub service_id: String,
    pub slots: Vec<ResolvedSlot>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            success: true,
            date: availability.date,
            service_id: availability.service_id,
            slots: availability.slots,
        }
    }
}
