//! # Registry Lifecycle
//!
//! This module owns everything that happens after records are built: collecting them,
//! wiring their alert channels, and running display and action passes.
//!
//! ## The Wiring Pattern
//!
//! Records know nothing about the [`Registry`]. When a record is added the registry attaches
//! its own handler to the record's alert channel, so every alert the record raises later is
//! written to the registry's output in the same synchronous call:
//!
//! ```rust,ignore
//! let mut registry = Registry::new(Rc::new(Stdout));
//! for record in sample_roster(StatisticsCounter::global())? {
//!     registry.add_entity(record);
//! }
//! registry.show_all();
//! registry.perform_all_actions();
//! ```
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging for the binary. See the [`tracing`]
//! module for levels and filters.

pub mod demo;
pub mod registry;
pub mod tracing;

pub use demo::sample_roster;
pub use registry::Registry;
pub use self::tracing::setup_tracing;
