use hotel_registry::framework::mock::RecordingOutput;
use hotel_registry::framework::{Record, RecordId, StatisticsCounter};
use hotel_registry::lifecycle::{sample_roster, Registry};
use hotel_registry::model::{Employee, Guest, Room};
use std::rc::Rc;

fn registry_with_roster(stats: &StatisticsCounter) -> (Registry, RecordingOutput) {
    let out = RecordingOutput::new();
    let mut registry = Registry::new(Rc::new(out.clone()));
    for record in sample_roster(stats).expect("Failed to build roster") {
        registry.add_entity(record);
    }
    (registry, out)
}

/// Full end-to-end run of the sample roster.
#[test]
fn test_full_registry_action_pass() {
    let stats = StatisticsCounter::new();
    let (registry, out) = registry_with_roster(&stats);

    assert_eq!(stats.total_entities(), 5);
    assert_eq!(registry.len(), 5);

    registry.perform_all_actions();

    assert_eq!(
        out.lines(),
        vec![
            "Ali is staying in room 203 for 3 nights.",
            "Sara is staying in room 305 for 12 nights.",
            "[ALERT for Sara]: Long stay, consider discount.",
            "Omar is performing their duties as Receptionist.",
            "Room R1 (ID: 301) is currently occupied.",
            "Room R2 (ID: 302) is currently available.",
            "[ALERT for R2]: Room is available for booking.",
        ]
    );
    assert_eq!(registry.alerts_raised(), 2);
}

#[test]
fn test_show_all_separates_entries_with_blank_lines() {
    let stats = StatisticsCounter::new();
    let (registry, out) = registry_with_roster(&stats);

    registry.show_all();

    assert_eq!(
        out.lines(),
        vec![
            "Name: Ali | ID: 101",
            "Room: 203 | Nights: 3",
            "",
            "Name: Sara | ID: 102",
            "Room: 305 | Nights: 12",
            "",
            "Name: Omar | ID: 201",
            "Position: Receptionist",
            "",
            "Name: R1 | ID: 301",
            "Occupied: true",
            "",
            "Name: R2 | ID: 302",
            "Occupied: false",
        ]
    );
    assert_eq!(registry.alerts_raised(), 0);
}

#[test]
fn test_show_all_on_empty_registry_prints_nothing() {
    let out = RecordingOutput::new();
    let registry = Registry::new(Rc::new(out.clone()));

    registry.show_all();
    registry.perform_all_actions();

    assert!(registry.is_empty());
    assert!(out.lines().is_empty());
}

#[test]
fn test_registry_subscribes_once_per_insert() {
    let stats = StatisticsCounter::new();
    let (registry, _out) = registry_with_roster(&stats);

    for record in registry.iter() {
        assert_eq!(record.subscriber_count(), 1, "record {}", record.id());
    }
}

#[test]
fn test_duplicate_insert_duplicates_alerts() {
    let stats = StatisticsCounter::new();
    let out = RecordingOutput::new();
    let mut registry = Registry::new(Rc::new(out.clone()));
    let room: Rc<dyn Record> =
        Rc::new(Room::new(&stats, "R9", 309, false).expect("valid room"));

    registry.add_entity(Rc::clone(&room));
    registry.add_entity(Rc::clone(&room));
    room.perform_action(&out);

    assert_eq!(room.subscriber_count(), 2);
    assert_eq!(out.alert_count(), 2);
}

#[test]
fn test_records_outlive_registry_handles() {
    let stats = StatisticsCounter::new();
    let out = RecordingOutput::new();
    let mut registry = Registry::new(Rc::new(out.clone()));
    let employee = Rc::new(Employee::new(&stats, "Omar", 201, "Receptionist").expect("valid"));

    registry.add_entity(employee.clone());
    employee.set_position("Night Manager");

    let found = registry.find(RecordId::new(201).unwrap()).expect("employee registered");
    found.display_info(&out);
    assert_eq!(out.take(), vec!["Name: Omar | ID: 201", "Position: Night Manager"]);
    assert!(registry.find(RecordId::new(999).unwrap()).is_none());
}

#[test]
fn test_rename_is_reflected_in_alerts() {
    let stats = StatisticsCounter::new();
    let out = RecordingOutput::new();
    let mut registry = Registry::new(Rc::new(out.clone()));
    let guest = Rc::new(Guest::new(&stats, "Sara", 102, 305, 12).expect("valid guest"));

    registry.add_entity(guest.clone());
    guest.set_name("Sara Ahmed").expect("valid rename");
    registry.perform_all_actions();

    assert_eq!(
        out.lines(),
        vec![
            "Sara Ahmed is staying in room 305 for 12 nights.",
            "[ALERT for Sara Ahmed]: Long stay, consider discount.",
        ]
    );
}
