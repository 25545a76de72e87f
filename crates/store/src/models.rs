//! Airtable record shapes. Field names here are the literal column names of
//! the venue's base and appear nowhere else in the workspace.

use alleybook_core::models::{
    booking::{BookingRecord, BookingStatus},
    slot::{SlotDefinition, AVAILABLE_STATUS},
};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de> + Default"))]
pub struct AirtableRecord<F> {
    pub id: String,
    #[serde(default)]
    pub fields: F,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de> + Default"))]
pub struct ListResponse<F> {
    pub records: Vec<AirtableRecord<F>>,
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityFields {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Start Time")]
    pub start_time: Option<String>,
    #[serde(rename = "End Time")]
    pub end_time: Option<String>,
    #[serde(rename = "Capacity", default, deserialize_with = "count")]
    pub capacity: Option<u32>,
    #[serde(rename = "Booked Spots", default, deserialize_with = "count")]
    pub booked_spots: Option<u32>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

/// Reads a number column as a count. Airtable may hand back `2.0` or a
/// negative for a number column; fractions truncate toward zero and
/// negatives read as 0.
fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(|value| value as u32))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFields {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Time Slot")]
    pub time_slot: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

// `Service` is a linked-record column and comes back as a list of record ids,
// so the queried service id is carried over instead of the raw column.
impl AirtableRecord<AvailabilityFields> {
    pub fn into_slot_definition(self, date: &str, service_id: &str) -> SlotDefinition {
        let fields = self.fields;
        SlotDefinition {
            id: self.id,
            date: fields.date.unwrap_or_else(|| date.to_string()),
            service: service_id.to_string(),
            start_time: fields.start_time,
            end_time: fields.end_time,
            capacity: fields.capacity,
            booked_spots: fields.booked_spots,
            status: fields
                .status
                .unwrap_or_else(|| AVAILABLE_STATUS.to_string()),
        }
    }
}

impl AirtableRecord<BookingFields> {
    pub fn into_booking_record(self, date: &str, service_id: &str) -> BookingRecord {
        let fields = self.fields;
        BookingRecord {
            id: self.id,
            date: fields.date.unwrap_or_else(|| date.to_string()),
            service: service_id.to_string(),
            time_slot: fields.time_slot,
            status: fields
                .status
                .map(BookingStatus::from)
                .unwrap_or_else(|| BookingStatus::Other(String::new())),
        }
    }
}
