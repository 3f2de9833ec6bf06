use crate::framework::core::sealed::Sealed;
use crate::framework::{Output, Record, RecordBase, RecordError, RecordKind, StatisticsCounter};
use tracing::info;

/// Alert text raised by a vacant room.
pub const AVAILABLE_ALERT: &str = "Room is available for booking.";

/// A bookable room. Occupancy is fixed when the record is built.
#[derive(Debug)]
pub struct Room {
    base: RecordBase,
    occupied: bool,
}

impl Room {
    /// Creates a new Room. Only the name and id are validated.
    pub fn new(
        stats: &StatisticsCounter,
        name: impl Into<String>,
        id: i64,
        occupied: bool,
    ) -> Result<Self, RecordError> {
        let base = RecordBase::new(name, id)?;
        Ok(Self {
            base: base.commit(RecordKind::Room, stats),
            occupied,
        })
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

impl Sealed for Room {}

impl Record for Room {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Room
    }

    fn details(&self) -> String {
        format!("Occupied: {}", self.occupied)
    }

    fn perform_action(&self, out: &dyn Output) {
        let status = if self.occupied { "occupied" } else { "available" };
        out.line(&format!(
            "Room {} (ID: {}) is currently {}.",
            self.name(),
            self.id(),
            status
        ));
        if !self.occupied {
            info!(id = %self.id(), "Vacancy alert");
            self.base.trigger_alert(AVAILABLE_ALERT);
        }
    }
}
