//! Airtable formula expressions for the two availability lookups.

use alleybook_core::models::{booking::BookingStatus, slot::AVAILABLE_STATUS};

/// Renders `value` as a single-quoted formula string literal.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `AND({Date} = '..', {Service} = '..', {Status} = 'Available')`
pub fn available_slots(date: &str, service_id: &str) -> String {
    format!(
        "AND({{Date}} = {}, {{Service}} = {}, {{Status}} = {})",
        quote(date),
        quote(service_id),
        quote(AVAILABLE_STATUS)
    )
}

/// `AND({Date} = '..', {Service} = '..', OR({Status} = 'Confirmed', {Status} = 'Pending'))`
pub fn active_bookings(date: &str, service_id: &str) -> String {
    let statuses = BookingStatus::HOLDING
        .iter()
        .map(|status| format!("{{Status}} = {}", quote(status.as_str())))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "AND({{Date}} = {}, {{Service}} = {}, OR({}))",
        quote(date),
        quote(service_id),
        statuses
    )
}
