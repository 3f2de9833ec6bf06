//! # Core Record Contract
//!
//! This module defines the building blocks shared by every record type.
//!
//! ## Key Types
//!
//! - [`Record`]: The trait every variant (Guest, Employee, Room) implements.
//! - [`RecordBase`]: The shared state (name, id, alert channel) each variant embeds.
//! - [`RecordId`]: Validated, positive identifier.
//! - [`RecordUpdate`]: Partial update DTO for the shared fields.
//!
//! # Architecture Note
//! The set of record types is closed, but consumers such as the
//! [`Registry`](crate::lifecycle::Registry) only ever talk to `dyn Record`. A variant that
//! forgets `perform_action` or `details` does not compile, which is the whole contract.

use crate::framework::alert::{AlertChannel, AlertHandler};
use crate::framework::error::RecordError;
use crate::framework::output::Output;
use crate::framework::stats::StatisticsCounter;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt::{self, Display};
use tracing::{debug, warn};

// =============================================================================
// 1. IDENTITY
// =============================================================================

/// Type-safe identifier for records. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// Validates a raw identifier.
    ///
    /// # Errors
    /// [`RecordError::InvalidId`] if `raw` is zero or negative.
    pub fn new(raw: i64) -> Result<Self, RecordError> {
        match u64::try_from(raw) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(RecordError::InvalidId(raw)),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which concrete variant a record is. Used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Guest,
    Employee,
    Room,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Guest => "guest",
            RecordKind::Employee => "employee",
            RecordKind::Room => "room",
        };
        f.write_str(label)
    }
}

/// Payload for updating the shared fields of any record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub name: Option<String>,
}

// =============================================================================
// 2. SHARED STATE
// =============================================================================

/// Rejects empty and whitespace-only names.
pub(crate) fn validate_name(name: &str) -> Result<(), RecordError> {
    if name.trim().is_empty() {
        return Err(RecordError::InvalidName);
    }
    Ok(())
}

/// State common to every record: a mutable name, an immutable id and the alert channel.
///
/// Interior mutability is used for the name because records are shared (`Rc`) between the
/// registry and whoever built them, and renaming must work through either handle.
#[derive(Debug)]
pub struct RecordBase {
    name: RefCell<String>,
    id: RecordId,
    alerts: AlertChannel,
}

impl RecordBase {
    /// Validates the shared fields.
    ///
    /// Does not count the record; variants do that once their own fields pass.
    pub(crate) fn new(name: impl Into<String>, id: i64) -> Result<Self, RecordError> {
        let name = name.into();
        validate_name(&name)?;
        let id = RecordId::new(id)?;
        Ok(Self {
            name: RefCell::new(name),
            id,
            alerts: AlertChannel::new(),
        })
    }

    /// Finalizes construction once every variant-specific field has been validated.
    pub(crate) fn commit(self, kind: RecordKind, stats: &StatisticsCounter) -> Self {
        let total = stats.increment_total();
        debug!(entity_type = %kind, id = %self.id, name = %self.name.borrow(), total, "Created");
        self
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Renames the record. On failure the previous name is kept.
    pub fn set_name(&self, name: impl Into<String>) -> Result<(), RecordError> {
        let name = name.into();
        if let Err(e) = validate_name(&name) {
            warn!(id = %self.id, "Rejected empty name");
            return Err(e);
        }
        *self.name.borrow_mut() = name;
        Ok(())
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// `Name: {name} | ID: {id}`
    pub fn summary(&self) -> String {
        format!("Name: {} | ID: {}", self.name.borrow(), self.id)
    }

    pub fn subscribe(&self, handler: AlertHandler) {
        self.alerts.subscribe(handler);
    }

    pub fn subscriber_count(&self) -> usize {
        self.alerts.subscriber_count()
    }

    /// Tags `message` with the current name and delivers it to every subscriber.
    ///
    /// Only variants raise alerts; outside callers have no way to reach this.
    pub(crate) fn trigger_alert(&self, message: &str) -> usize {
        let payload = format!("[ALERT for {}]: {}", self.name(), message);
        self.alerts.publish(&payload)
    }
}

// =============================================================================
// 3. THE CONTRACT
// =============================================================================

pub(crate) mod sealed {
    /// Implemented only by the record types in [`crate::model`].
    pub trait Sealed {}
}

/// Behavior shared by guests, employees and rooms.
///
/// Implementors provide [`Record::base`], [`Record::kind`], [`Record::details`] and
/// [`Record::perform_action`]. Everything else is derived from the shared base.
///
/// The trait is sealed: `Guest`, `Employee` and `Room` are its only implementors, so every
/// record a [`Registry`](crate::lifecycle::Registry) can hold went through a counted
/// constructor.
///
/// ```compile_fail
/// use hotel_registry::framework::{Output, Record, RecordBase, RecordKind};
///
/// struct Suite {
///     base: RecordBase,
/// }
///
/// impl Record for Suite {
///     fn base(&self) -> &RecordBase {
///         &self.base
///     }
///     fn kind(&self) -> RecordKind {
///         RecordKind::Room
///     }
///     fn details(&self) -> String {
///         String::new()
///     }
///     fn perform_action(&self, _out: &dyn Output) {}
/// }
/// ```
///
/// Shared state cannot be built outside the crate either:
///
/// ```compile_fail
/// use hotel_registry::framework::RecordBase;
///
/// let _base = RecordBase::new("Suite", 1);
/// ```
pub trait Record: sealed::Sealed {
    fn base(&self) -> &RecordBase;

    fn kind(&self) -> RecordKind;

    /// The variant's own summary line, printed after the base line.
    fn details(&self) -> String;

    /// Domain-specific behavior. May raise alerts.
    fn perform_action(&self, out: &dyn Output);

    /// Writes the base summary followed by the variant's details.
    fn display_info(&self, out: &dyn Output) {
        out.line(&self.base().summary());
        out.line(&self.details());
    }

    fn name(&self) -> String {
        self.base().name()
    }

    fn id(&self) -> RecordId {
        self.base().id()
    }

    fn set_name(&self, name: &str) -> Result<(), RecordError> {
        self.base().set_name(name)
    }

    /// Applies a partial update to the shared fields.
    fn apply_update(&self, update: RecordUpdate) -> Result<(), RecordError> {
        if let Some(name) = update.name {
            self.base().set_name(name)?;
        }
        Ok(())
    }

    fn subscribe(&self, handler: AlertHandler) {
        self.base().subscribe(handler);
    }

    fn subscriber_count(&self) -> usize {
        self.base().subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_rejects_non_positive() {
        assert_eq!(RecordId::new(0), Err(RecordError::InvalidId(0)));
        assert_eq!(RecordId::new(-7), Err(RecordError::InvalidId(-7)));
        assert_eq!(RecordId::new(42).map(RecordId::get), Ok(42));
    }

    #[test]
    fn base_rejects_blank_names() {
        assert_eq!(RecordBase::new("", 1).err(), Some(RecordError::InvalidName));
        assert_eq!(RecordBase::new("   \t", 1).err(), Some(RecordError::InvalidName));
    }

    #[test]
    fn failed_rename_keeps_previous_name() {
        let base = RecordBase::new("Ali", 1).expect("valid base");
        assert_eq!(base.set_name(" "), Err(RecordError::InvalidName));
        assert_eq!(base.name(), "Ali");
        base.set_name("Ali Khan").expect("valid rename");
        assert_eq!(base.summary(), "Name: Ali Khan | ID: 1");
    }
}
