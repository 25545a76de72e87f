//! # alleybook core
//!
//! Domain types and the availability rule for the bowling alley booking
//! backend. Nothing in here knows which record store backs the data; the
//! resolver talks to [`repositories::SlotRepository`] and
//! [`repositories::BookingRepository`] only.

pub mod errors;
pub mod mock;
pub mod models;
pub mod ordering;
pub mod repositories;
pub mod resolver;
