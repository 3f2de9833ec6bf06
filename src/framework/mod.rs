//! Shared record framework.
//!
//! This module provides the building blocks every record type is made from.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that guests, employees and rooms implement
//! - [`RecordBase`] - Shared name/id state and the alert channel
//! - [`AlertChannel`] - Per-record synchronous subscriber list
//! - [`StatisticsCounter`] - Process-wide construction count
//! - [`Output`] - Line-oriented text sink
//! - [`RecordError`] - Validation failures
//!
//! # Testing
//!
//! See [`mock`] for an in-memory [`Output`] that captures lines.

pub mod alert;
pub mod core;
pub mod error;
pub mod mock;
pub mod output;
pub mod stats;

pub use alert::{AlertChannel, AlertHandler};
pub use self::core::{Record, RecordBase, RecordId, RecordKind, RecordUpdate};
pub use error::RecordError;
pub use output::{Output, Stdout};
pub use stats::StatisticsCounter;
