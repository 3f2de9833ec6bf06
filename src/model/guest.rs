use crate::framework::core::sealed::Sealed;
use crate::framework::{Output, Record, RecordBase, RecordError, RecordKind, StatisticsCounter};
use tracing::info;

/// Stays longer than this many nights raise an alert.
pub const LONG_STAY_THRESHOLD: u64 = 10;

/// Alert text for stays over [`LONG_STAY_THRESHOLD`].
pub const LONG_STAY_ALERT: &str = "Long stay, consider discount.";

/// A hotel guest occupying a room for a number of nights.
///
/// Room number and stay length are fixed at check-in.
#[derive(Debug)]
pub struct Guest {
    base: RecordBase,
    room_number: u64,
    nights: u64,
}

impl Guest {
    /// Creates a new Guest.
    ///
    /// # Arguments
    /// * `stats` - Counter incremented once the guest is fully validated
    /// * `name` - Guest's display name
    /// * `id` - Positive identifier
    /// * `room_number` - Positive room number
    /// * `nights` - Positive length of stay
    ///
    /// # Errors
    /// `InvalidName`, `InvalidId`, `InvalidRoomNumber` or `InvalidNights`. On error the
    /// counter is left untouched.
    pub fn new(
        stats: &StatisticsCounter,
        name: impl Into<String>,
        id: i64,
        room_number: i64,
        nights: i64,
    ) -> Result<Self, RecordError> {
        let base = RecordBase::new(name, id)?;
        let room_number =
            positive(room_number).ok_or(RecordError::InvalidRoomNumber(room_number))?;
        let nights = positive(nights).ok_or(RecordError::InvalidNights(nights))?;
        Ok(Self {
            base: base.commit(RecordKind::Guest, stats),
            room_number,
            nights,
        })
    }

    pub fn room_number(&self) -> u64 {
        self.room_number
    }

    pub fn nights(&self) -> u64 {
        self.nights
    }

    pub fn is_long_stay(&self) -> bool {
        self.nights > LONG_STAY_THRESHOLD
    }
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|v| *v > 0)
}

impl Sealed for Guest {}

impl Record for Guest {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Guest
    }

    fn details(&self) -> String {
        format!("Room: {} | Nights: {}", self.room_number, self.nights)
    }

    fn perform_action(&self, out: &dyn Output) {
        out.line(&format!(
            "{} is staying in room {} for {} nights.",
            self.name(),
            self.room_number,
            self.nights
        ));
        if self.is_long_stay() {
            info!(id = %self.id(), nights = self.nights, "Long stay alert");
            self.base.trigger_alert(LONG_STAY_ALERT);
        }
    }
}
