#![forbid(unsafe_code)]
use semainier::{
    aggregate, model::Booking, BookingAggregator, BookingId, DisplayZone, LayoutConfig,
};
use chrono::{NaiveDate, Timelike};
use std::collections::HashSet;

fn booking(id: &str, start: &str, client: &str) -> Booking {
    Booking::new(BookingId::new(id), start, client)
}

fn london() -> DisplayZone {
    DisplayZone::parse("Europe/London").unwrap()
}

#[test]
fn empty_input_yields_no_slots() {
    let out = aggregate(&[], &london());
    assert!(out.is_empty());
    assert!(out.rejected.is_empty());
}

#[test]
fn every_valid_booking_lands_in_exactly_one_slot() {
    let input = vec![
        booking("a", "2024-06-12T09:00:00Z", "Alice"),
        booking("b", "2024-06-12T09:00:00Z", "Bob"),
        booking("c", "garbage", "Carol"),
        booking("d", "2024-06-13T13:30:00Z", "Dan"),
        booking("e", "2024-06-12T09:00:00Z", "Eve"),
        booking("f", "", "Fay"),
    ];
    let out = aggregate(&input, &london());

    let placed: Vec<&str> = out
        .slots
        .iter()
        .flat_map(|s| s.members.iter().map(|m| m.booking.id.as_str()))
        .collect();
    let unique: HashSet<&str> = placed.iter().copied().collect();
    assert_eq!(placed.len(), unique.len());
    assert_eq!(unique, HashSet::from(["a", "b", "d", "e"]));
    assert_eq!(out.booking_count(), 4);

    let rejected: Vec<&str> = out.rejected.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(rejected, vec!["c", "f"]);
    assert!(out
        .rejected
        .iter()
        .all(|r| r.error.code() == "MALFORMED_TIMESTAMP"));
}

#[test]
fn groups_only_on_exact_instant() {
    let input = vec![
        booking("a", "2024-06-12T09:00:00.000Z", "Alice"),
        booking("b", "2024-06-12T09:00:00.001Z", "Bob"),
        booking("c", "2024-06-12T09:00:01Z", "Carol"),
        booking("d", "2024-06-12T10:00:00+01:00", "Dan"),
    ];
    let out = aggregate(&input, &london());

    assert_eq!(out.slots.len(), 3);
    let first: Vec<&str> = out.slots[0]
        .members
        .iter()
        .map(|m| m.booking.id.as_str())
        .collect();
    assert_eq!(first, vec!["a", "d"]);
    assert!(out.slots[0].is_group);
    assert!(!out.slots[1].is_group);
    assert!(!out.slots[2].is_group);
}

#[test]
fn slots_follow_first_appearance_and_keep_member_order() {
    let input = vec![
        booking("late", "2024-06-14T15:00:00Z", "Late"),
        booking("early", "2024-06-10T08:00:00Z", "Early"),
        booking("late2", "2024-06-14T15:00:00Z", "Late Two"),
    ];
    let out = aggregate(&input, &london());

    let labels: Vec<&str> = out.slots.iter().map(|s| s.display_label.as_str()).collect();
    assert_eq!(labels, vec!["2 Bookings At This Time", "Early"]);
    let members: Vec<&str> = out.slots[0]
        .members
        .iter()
        .map(|m| m.booking.client_name.as_str())
        .collect();
    assert_eq!(members, vec!["Late", "Late Two"]);
}

#[test]
fn label_and_preview_for_groups() {
    let input = vec![
        booking("a", "2024-06-12T09:00:00Z", "Alice").with_assignee("Maria"),
        booking("b", "2024-06-12T09:00:00Z", "Bob"),
        booking("c", "2024-06-12T09:00:00Z", "Carol"),
        booking("d", "2024-06-12T09:00:00Z", "Dan"),
        booking("e", "2024-06-12T11:00:00Z", "Eve"),
    ];
    let out = aggregate(&input, &london());

    let group = &out.slots[0];
    assert_eq!(group.display_label, "4 Bookings At This Time");
    assert_eq!(group.preview(), vec!["Bob", "Carol"]);
    assert_eq!(group.primary().booking.assignee(), "Maria");

    let single = &out.slots[1];
    assert_eq!(single.display_label, "Eve");
    assert!(single.preview().is_empty());
    assert_eq!(single.primary().booking.assignee(), "Unassigned");
}

#[test]
fn offset_uses_local_wall_clock() {
    // 13:30 UTC en juin = 14:30 BST
    let out = aggregate(&[booking("a", "2024-06-12T13:30:00Z", "Alice")], &london());
    let slot = &out.slots[0];
    assert_eq!(slot.key.hour(), 14);
    assert_eq!(slot.key.minute(), 30);
    assert_eq!(slot.top_offset_px, 450);
}

#[test]
fn offsets_outside_business_hours_are_not_clipped() {
    let input = vec![
        booking("early", "2024-01-10T06:00:00Z", "Early"),
        booking("late", "2024-01-10T21:45:00Z", "Late"),
    ];
    let out = aggregate(&input, &london());
    assert_eq!(out.slots[0].top_offset_px, -60);
    assert_eq!(out.slots[1].top_offset_px, 14 * 60 + 45);
}

#[test]
fn custom_layout_changes_offsets() {
    let layout = LayoutConfig {
        day_start_hour: 8,
        day_end_hour: 20,
        px_per_hour: 120,
    };
    let aggregator = BookingAggregator::new(london(), layout);
    let out = aggregator.aggregate(&[booking("a", "2024-01-10T09:15:00Z", "Alice")]);
    assert_eq!(out.slots[0].top_offset_px, 150);
}

#[test]
fn local_start_keeps_the_same_instant() {
    let input = vec![booking("a", "2024-06-12T23:30:00Z", "Night")];
    let out = aggregate(&input, &london());
    let member = &out.slots[0].members[0];
    assert_eq!(member.local_start.to_rfc3339(), "2024-06-13T00:30:00+01:00");
    assert_eq!(
        member.local_start.timestamp(),
        semainier::parse_instant("2024-06-12T23:30:00Z").unwrap().timestamp()
    );
    assert_eq!(
        out.slots[0].local_date(),
        NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()
    );
    assert_eq!(member.booking.start, "2024-06-12T23:30:00Z");
}

#[test]
fn aggregation_is_idempotent() {
    let input = vec![
        booking("a", "2024-06-12T09:00:00Z", "Alice"),
        booking("b", "2024-06-12T09:00:00Z", "Bob"),
        booking("c", "2024-06-13T16:10:00Z", "Carol"),
    ];
    let zone = london();
    let first = aggregate(&input, &zone);
    let second = aggregate(&input, &zone);
    assert_eq!(first.slots, second.slots);
}

#[test]
fn blank_client_name_falls_back_to_no_name() {
    let out = aggregate(&[booking("a", "2024-06-12T09:00:00Z", "   ")], &london());
    assert_eq!(out.slots[0].display_label, "No Name");
    assert_eq!(booking("b", "2024-06-12T09:00:00Z", " Bob ").client_name, "Bob");
}
