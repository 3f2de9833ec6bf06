//! # Hotel Registry Demo
//!
//! Builds the sample roster, registers it, and prints a display pass followed by an
//! action pass. Alerts appear inline, right after the record that raised them.

use hotel_registry::framework::{RecordError, StatisticsCounter, Stdout};
use hotel_registry::lifecycle::{sample_roster, setup_tracing, Registry};
use std::rc::Rc;
use tracing::info;

fn main() -> Result<(), RecordError> {
    setup_tracing();

    let stats = StatisticsCounter::global();
    let mut registry = Registry::new(Rc::new(Stdout));
    for record in sample_roster(stats)? {
        registry.add_entity(record);
    }

    println!("Total Entities Created: {}", stats.total_entities());
    println!();

    println!("=== Display Info ===");
    registry.show_all();
    println!();

    println!("=== Perform Actions ===");
    registry.perform_all_actions();

    info!(
        records = registry.len(),
        alerts = registry.alerts_raised(),
        "Demo completed"
    );
    Ok(())
}
