use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Other(String),
}

impl BookingStatus {
    /// Statuses whose bookings occupy their time slot.
    pub const HOLDING: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::Pending];

    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Other(status) => status.as_str(),
        }
    }

    pub fn holds_slot(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Pending)
    }
}

impl From<&str> for BookingStatus {
    fn from(status: &str) -> Self {
        match status {
            "Confirmed" => BookingStatus::Confirmed,
            "Pending" => BookingStatus::Pending,
            other => BookingStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(status: String) -> Self {
        BookingStatus::from(status.as_str())
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

/// An existing reservation against a venue time label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub date: String,
    pub service: String,
    pub time_slot: Option<String>,
    pub status: BookingStatus,
}
