use serde::{Deserialize, Serialize};

/// Status tag carried by every slot definition the store hands out.
pub const AVAILABLE_STATUS: &str = "Available";

/// A bookable window as the venue defined it.
///
/// `start_time` and `end_time` are venue labels such as `"10:00 AM"`. They are
/// compared as strings and never parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDefinition {
    pub id: String,
    pub date: String,
    pub service: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub capacity: Option<u32>,
    pub booked_spots: Option<u32>,
    pub status: String,
}

impl SlotDefinition {
    pub fn capacity(&self) -> u32 {
        self.capacity.unwrap_or(1)
    }

    pub fn booked(&self) -> u32 {
        self.booked_spots.unwrap_or(0)
    }
}

/// A slot as returned to callers, annotated with whether it can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSlot {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub capacity: u32,
    pub booked: u32,
    pub is_available: bool,
}
