use std::sync::Arc;

use alleybook_core::{
    errors::{AlleyError, StoreError},
    mock::{MockBookingRepo, MockSlotRepo},
    models::{
        availability::AvailabilityRequest,
        booking::{BookingRecord, BookingStatus},
        slot::SlotDefinition,
    },
    ordering::SlotOrder,
    resolver::{resolve_slots, AvailabilityResolver},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const DATE: &str = "2025-06-01";
const SERVICE: &str = "recABC";

fn slot(id: &str, start: &str, capacity: Option<u32>, booked: Option<u32>) -> SlotDefinition {
    SlotDefinition {
        id: id.to_string(),
        date: DATE.to_string(),
        service: SERVICE.to_string(),
        start_time: Some(start.to_string()),
        end_time: None,
        capacity,
        booked_spots: booked,
        status: "Available".to_string(),
    }
}

fn booking(time_slot: &str, status: BookingStatus) -> BookingRecord {
    BookingRecord {
        id: format!("recBooking-{time_slot}"),
        date: DATE.to_string(),
        service: SERVICE.to_string(),
        time_slot: Some(time_slot.to_string()),
        status,
    }
}

fn request() -> AvailabilityRequest {
    AvailabilityRequest::new(Some(DATE.to_string()), Some(SERVICE.to_string())).unwrap()
}

fn slots_returning(definitions: Vec<SlotDefinition>) -> MockSlotRepo {
    let mut repo = MockSlotRepo::new();
    repo.expect_available_slots()
        .withf(|date, service_id| date == DATE && service_id == SERVICE)
        .times(1)
        .returning(move |_, _| Ok(definitions.clone()));
    repo
}

fn bookings_returning(bookings: Vec<BookingRecord>) -> MockBookingRepo {
    let mut repo = MockBookingRepo::new();
    repo.expect_active_bookings()
        .withf(|date, service_id| date == DATE && service_id == SERVICE)
        .times(1)
        .returning(move |_, _| Ok(bookings.clone()));
    repo
}

fn resolver(slots: MockSlotRepo, bookings: MockBookingRepo, order: SlotOrder) -> AvailabilityResolver {
    AvailabilityResolver::new(Arc::new(slots), Arc::new(bookings), order)
}

#[rstest]
#[case::headroom_no_conflict(Some(2), Some(1), None, true)]
#[case::defaults_no_conflict(None, None, None, true)]
#[case::full(Some(2), Some(2), None, false)]
#[case::overbooked(Some(1), Some(3), None, false)]
#[case::zero_capacity(Some(0), None, None, false)]
#[case::confirmed_veto(Some(2), Some(1), Some(BookingStatus::Confirmed), false)]
#[case::pending_veto(Some(5), Some(0), Some(BookingStatus::Pending), false)]
#[case::full_and_vetoed(Some(1), Some(1), Some(BookingStatus::Confirmed), false)]
fn test_resolve_slots_rule(
    #[case] capacity: Option<u32>,
    #[case] booked: Option<u32>,
    #[case] conflicting: Option<BookingStatus>,
    #[case] expected: bool,
) {
    let bookings: Vec<BookingRecord> = conflicting
        .into_iter()
        .map(|status| booking("10:00 AM", status))
        .collect();

    let resolved = resolve_slots(vec![slot("recSlot1", "10:00 AM", capacity, booked)], &bookings);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].is_available, expected);
}

#[test]
fn test_resolve_slots_copies_and_defaults_counts() {
    let resolved = resolve_slots(vec![slot("recSlot1", "10:00 AM", None, None)], &[]);

    assert_eq!(resolved[0].id, "recSlot1");
    assert_eq!(resolved[0].start_time.as_deref(), Some("10:00 AM"));
    assert_eq!(resolved[0].capacity, 1);
    assert_eq!(resolved[0].booked, 0);
}

#[test]
fn test_resolve_slots_veto_requires_exact_label() {
    let bookings = vec![
        booking("10:00AM", BookingStatus::Confirmed),
        booking("10:00 am", BookingStatus::Confirmed),
        booking(" 10:00 AM", BookingStatus::Pending),
    ];

    let resolved = resolve_slots(vec![slot("recSlot1", "10:00 AM", Some(2), Some(0))], &bookings);

    assert!(resolved[0].is_available);
}

#[test]
fn test_resolve_slots_bookings_do_not_change_booked_count() {
    let bookings = vec![
        booking("10:00 AM", BookingStatus::Confirmed),
        booking("10:00 AM", BookingStatus::Pending),
    ];

    let resolved = resolve_slots(vec![slot("recSlot1", "10:00 AM", Some(4), Some(1))], &bookings);

    assert_eq!(resolved[0].booked, 1);
    assert!(!resolved[0].is_available);
}

#[test]
fn test_resolve_slots_without_start_time_is_never_vetoed() {
    let mut definition = slot("recSlot1", "unused", Some(1), Some(0));
    definition.start_time = None;
    let untimed_booking = BookingRecord {
        time_slot: None,
        ..booking("x", BookingStatus::Confirmed)
    };

    let resolved = resolve_slots(vec![definition], &[untimed_booking]);

    assert!(resolved[0].is_available);
}

#[tokio::test]
async fn test_resolve_example_blocked_by_booking() {
    let resolver = resolver(
        slots_returning(vec![slot("recSlot1", "10:00 AM", Some(2), Some(1))]),
        bookings_returning(vec![booking("10:00 AM", BookingStatus::Confirmed)]),
        SlotOrder::Lexicographic,
    );

    let availability = resolver.resolve(&request()).await.unwrap();

    assert_eq!(availability.date, DATE);
    assert_eq!(availability.service_id, SERVICE);
    assert_eq!(availability.slots.len(), 1);
    assert!(!availability.slots[0].is_available);
}

#[tokio::test]
async fn test_resolve_example_open_without_bookings() {
    let resolver = resolver(
        slots_returning(vec![slot("recSlot1", "10:00 AM", Some(2), Some(1))]),
        bookings_returning(Vec::new()),
        SlotOrder::Lexicographic,
    );

    let availability = resolver.resolve(&request()).await.unwrap();

    assert!(availability.slots[0].is_available);
}

#[tokio::test]
async fn test_resolve_no_definitions_yields_empty_list() {
    let resolver = resolver(
        slots_returning(Vec::new()),
        bookings_returning(vec![booking("10:00 AM", BookingStatus::Confirmed)]),
        SlotOrder::Lexicographic,
    );

    let availability = resolver.resolve(&request()).await.unwrap();

    assert!(availability.slots.is_empty());
}

#[tokio::test]
async fn test_resolve_rejected_booking_lookup_is_advisory() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_active_bookings()
        .times(1)
        .returning(|_, _| {
            Err(StoreError::Rejected {
                status: 503,
                body: "unavailable".to_string(),
            })
        });

    let resolver = resolver(
        slots_returning(vec![
            slot("recOpen", "10:00 AM", Some(2), Some(1)),
            slot("recFull", "11:00 AM", Some(1), Some(1)),
        ]),
        bookings,
        SlotOrder::Lexicographic,
    );

    let availability = resolver.resolve(&request()).await.unwrap();

    let flags: Vec<(&str, bool)> = availability
        .slots
        .iter()
        .map(|slot| (slot.id.as_str(), slot.is_available))
        .collect();
    assert_eq!(flags, vec![("recOpen", true), ("recFull", false)]);
}

#[tokio::test]
async fn test_resolve_rejected_slot_lookup_is_fatal() {
    let mut slots = MockSlotRepo::new();
    slots.expect_available_slots().times(1).returning(|_, _| {
        Err(StoreError::Rejected {
            status: 401,
            body: "AUTHENTICATION_REQUIRED".to_string(),
        })
    });
    let mut bookings = MockBookingRepo::new();
    bookings.expect_active_bookings().never();

    let result = resolver(slots, bookings, SlotOrder::Lexicographic)
        .resolve(&request())
        .await;

    match result {
        Err(AlleyError::UpstreamUnavailable(StoreError::Rejected { status, .. })) => {
            assert_eq!(status, 401)
        }
        other => panic!("Expected UpstreamUnavailable, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_malformed_slot_response_is_internal() {
    let mut slots = MockSlotRepo::new();
    slots
        .expect_available_slots()
        .times(1)
        .returning(|_, _| Err(StoreError::Malformed(eyre::eyre!("missing field `records`"))));
    let mut bookings = MockBookingRepo::new();
    bookings.expect_active_bookings().never();

    let result = resolver(slots, bookings, SlotOrder::Lexicographic)
        .resolve(&request())
        .await;

    match result {
        Err(AlleyError::Internal(report)) => {
            assert!(report.to_string().contains("missing field `records`"))
        }
        other => panic!("Expected Internal error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_booking_transport_failure_is_internal() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_active_bookings()
        .times(1)
        .returning(|_, _| Err(StoreError::Transport(eyre::eyre!("connection reset"))));

    let result = resolver(
        slots_returning(vec![slot("recSlot1", "10:00 AM", None, None)]),
        bookings,
        SlotOrder::Lexicographic,
    )
    .resolve(&request())
    .await;

    match result {
        Err(AlleyError::Internal(report)) => {
            assert!(report.to_string().contains("connection reset"))
        }
        other => panic!("Expected Internal error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_keeps_store_order_by_default() {
    let resolver = resolver(
        slots_returning(vec![
            slot("recTen", "10:00 AM", None, None),
            slot("recNine", "9:00 AM", None, None),
        ]),
        bookings_returning(Vec::new()),
        SlotOrder::Lexicographic,
    );

    let availability = resolver.resolve(&request()).await.unwrap();

    let ids: Vec<&str> = availability.slots.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["recTen", "recNine"]);
}

#[tokio::test]
async fn test_resolve_chronological_order() {
    let resolver = resolver(
        slots_returning(vec![
            slot("recTen", "10:00 AM", None, None),
            slot("recOnePm", "1:00 PM", None, None),
            slot("recNine", "9:00 AM", None, None),
        ]),
        bookings_returning(Vec::new()),
        SlotOrder::Chronological,
    );

    let availability = resolver.resolve(&request()).await.unwrap();

    let ids: Vec<&str> = availability.slots.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["recNine", "recTen", "recOnePm"]);
}
