use crate::framework::core::sealed::Sealed;
use crate::framework::{
    Output, Record, RecordBase, RecordError, RecordKind, RecordUpdate, StatisticsCounter,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// A staff member. The position is free text and can change at any time.
#[derive(Debug)]
pub struct Employee {
    base: RecordBase,
    position: RefCell<String>,
}

/// Payload for updating an existing employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
}

impl Employee {
    /// Creates a new Employee. Only the name and id are validated.
    pub fn new(
        stats: &StatisticsCounter,
        name: impl Into<String>,
        id: i64,
        position: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let base = RecordBase::new(name, id)?;
        Ok(Self {
            base: base.commit(RecordKind::Employee, stats),
            position: RefCell::new(position.into()),
        })
    }

    pub fn position(&self) -> String {
        self.position.borrow().clone()
    }

    pub fn set_position(&self, position: impl Into<String>) {
        *self.position.borrow_mut() = position.into();
    }

    /// Applies a partial update.
    ///
    /// The name is checked first; if it is rejected the position is not touched either.
    pub fn update(&self, update: EmployeeUpdate) -> Result<(), RecordError> {
        self.apply_update(RecordUpdate { name: update.name })?;
        if let Some(position) = update.position {
            self.set_position(position);
        }
        Ok(())
    }
}

impl Sealed for Employee {}

impl Record for Employee {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Employee
    }

    fn details(&self) -> String {
        format!("Position: {}", self.position.borrow())
    }

    fn perform_action(&self, out: &dyn Output) {
        out.line(&format!(
            "{} is performing their duties as {}.",
            self.name(),
            self.position.borrow()
        ));
    }
}
