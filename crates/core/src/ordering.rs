use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::slot::ResolvedSlot;

const CLOCK_FORMATS: [&str; 4] = ["%I:%M %p", "%I:%M%p", "%H:%M:%S", "%H:%M"];

/// How resolved slots are ordered in a response.
///
/// `Lexicographic` leaves the store's string sort alone, so `"10:00 AM"`
/// lands before `"9:00 AM"`. `Chronological` re-sorts by clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotOrder {
    #[default]
    Lexicographic,
    Chronological,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown slot order `{0}`, expected `lexicographic` or `chronological`")]
pub struct ParseSlotOrderError(String);

impl SlotOrder {
    pub fn apply(self, slots: &mut [ResolvedSlot]) {
        if self == SlotOrder::Chronological {
            // Stable: unparseable labels trail in their incoming order.
            slots.sort_by_key(|slot| {
                let time = slot.start_time.as_deref().and_then(parse_clock_time);
                (time.is_none(), time)
            });
        }
    }
}

impl FromStr for SlotOrder {
    type Err = ParseSlotOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicographic" => Ok(SlotOrder::Lexicographic),
            "chronological" => Ok(SlotOrder::Chronological),
            _ => Err(ParseSlotOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for SlotOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotOrder::Lexicographic => f.write_str("lexicographic"),
            SlotOrder::Chronological => f.write_str("chronological"),
        }
    }
}

/// Reads a venue label such as `"9:30 PM"` or `"21:30"` as a time of day.
pub fn parse_clock_time(label: &str) -> Option<NaiveTime> {
    let label = label.trim();
    CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(label, format).ok())
}
