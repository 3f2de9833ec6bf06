//! The sample roster used by the binary and the end-to-end tests.

use crate::framework::{Record, RecordError, StatisticsCounter};
use crate::model::{Employee, Guest, Room};
use std::rc::Rc;

/// Builds the demonstration records in display order:
/// two guests (one on a long stay), a receptionist, an occupied room and a vacant one.
pub fn sample_roster(stats: &StatisticsCounter) -> Result<Vec<Rc<dyn Record>>, RecordError> {
    let mut roster: Vec<Rc<dyn Record>> = Vec::with_capacity(5);
    roster.push(Rc::new(Guest::new(stats, "Ali", 101, 203, 3)?));
    roster.push(Rc::new(Guest::new(stats, "Sara", 102, 305, 12)?));
    roster.push(Rc::new(Employee::new(stats, "Omar", 201, "Receptionist")?));
    roster.push(Rc::new(Room::new(stats, "R1", 301, true)?));
    roster.push(Rc::new(Room::new(stats, "R2", 302, false)?));
    Ok(roster)
}
