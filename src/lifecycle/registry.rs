use crate::framework::{Output, Record, RecordId};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, info_span};

/// Forwards alerts from every registered record to the registry's output.
struct AlertRelay {
    output: Rc<dyn Output>,
    relayed: Cell<usize>,
}

impl AlertRelay {
    /// Writes the alert unchanged. No filtering, no routing by record type.
    fn handle_alert(&self, message: &str) {
        self.relayed.set(self.relayed.get() + 1);
        info!(alert = message, "Alert relayed");
        self.output.line(message);
    }
}

/// Ordered collection of records that aggregates their alerts.
///
/// `Registry` is responsible for:
/// - **Ordering**: Records are kept in insertion order; there is no removal.
/// - **Alert Wiring**: Each inserted record gets exactly one subscription to the registry's
///   handler.
/// - **Bulk Passes**: [`show_all`](Registry::show_all) and
///   [`perform_all_actions`](Registry::perform_all_actions).
///
/// # Duplicate Insertion
///
/// Inserting the same `Rc` twice subscribes the handler twice, so that record's alerts are
/// printed twice. Callers must not do this; it is not checked.
///
/// # Example
///
/// ```
/// use hotel_registry::framework::mock::RecordingOutput;
/// use hotel_registry::framework::StatisticsCounter;
/// use hotel_registry::lifecycle::Registry;
/// use hotel_registry::model::Room;
/// use std::rc::Rc;
///
/// let stats = StatisticsCounter::new();
/// let out = RecordingOutput::new();
/// let mut registry = Registry::new(Rc::new(out.clone()));
///
/// registry.add_entity(Rc::new(Room::new(&stats, "R2", 302, false).unwrap()));
/// registry.perform_all_actions();
///
/// assert_eq!(out.lines(), vec![
///     "Room R2 (ID: 302) is currently available.",
///     "[ALERT for R2]: Room is available for booking.",
/// ]);
/// ```
pub struct Registry {
    entities: Vec<Rc<dyn Record>>,
    relay: Rc<AlertRelay>,
}

impl Registry {
    /// Creates an empty registry writing to `output`.
    pub fn new(output: Rc<dyn Output>) -> Self {
        Self {
            entities: Vec::new(),
            relay: Rc::new(AlertRelay {
                output,
                relayed: Cell::new(0),
            }),
        }
    }

    /// Appends `record` and subscribes the registry's alert handler to it.
    pub fn add_entity(&mut self, record: Rc<dyn Record>) {
        let relay = Rc::clone(&self.relay);
        record.subscribe(Rc::new(move |message: &str| relay.handle_alert(message)));
        debug!(
            entity_type = %record.kind(),
            id = %record.id(),
            size = self.entities.len() + 1,
            "Added"
        );
        self.entities.push(record);
    }

    /// Displays every record in insertion order, with a blank line between entries.
    pub fn show_all(&self) {
        let _span = info_span!("show_all", size = self.entities.len()).entered();
        for (i, record) in self.entities.iter().enumerate() {
            if i > 0 {
                self.relay.output.line("");
            }
            record.display_info(self.relay.output.as_ref());
        }
    }

    /// Runs every record's action in insertion order.
    ///
    /// Alerts raised along the way are written immediately, right after the line of the
    /// record that raised them.
    pub fn perform_all_actions(&self) {
        let _span = info_span!("perform_all_actions", size = self.entities.len()).entered();
        let before = self.relay.relayed.get();
        for record in &self.entities {
            record.perform_action(self.relay.output.as_ref());
        }
        info!(alerts = self.relay.relayed.get() - before, "Actions complete");
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Record>> {
        self.entities.iter()
    }

    /// First record with the given id, if any.
    pub fn find(&self, id: RecordId) -> Option<&Rc<dyn Record>> {
        self.entities.iter().find(|record| record.id() == id)
    }

    /// Total number of alerts the registry has written since it was created.
    pub fn alerts_raised(&self) -> usize {
        self.relay.relayed.get()
    }
}
