//! # Mock Output
//!
//! Utilities for asserting on what records and the registry print.
//!
//! ```
//! use hotel_registry::framework::mock::RecordingOutput;
//! use hotel_registry::framework::Output;
//!
//! let out = RecordingOutput::new();
//! out.line("hello");
//! assert_eq!(out.lines(), vec!["hello"]);
//! ```

use crate::framework::output::Output;
use std::cell::RefCell;
use std::rc::Rc;

/// An [`Output`] that keeps every line in memory.
///
/// Clones share the same buffer, so one handle can be given to a
/// [`Registry`](crate::lifecycle::Registry) while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the captured lines and clears the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Number of captured lines that are alerts.
    pub fn alert_count(&self) -> usize {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.starts_with("[ALERT for "))
            .count()
    }
}

impl Output for RecordingOutput {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
