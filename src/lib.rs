//! # Hotel Registry
//!
//! > **Polymorphic records with a synchronous alert channel.**
//!
//! This crate models a small registry of guests, employees and rooms. Every record shares
//! an identity (name and id) and a display/action contract, and any record can raise an
//! alert that the [`Registry`](lifecycle::Registry) it belongs to writes out immediately.
//!
//! ## 🏗️ Design
//!
//! ### One trait, three variants
//! [`Record`](framework::Record) is implemented by [`Guest`](model::Guest),
//! [`Employee`](model::Employee) and [`Room`](model::Room). Each embeds a
//! [`RecordBase`](framework::RecordBase) holding the shared state, and supplies its own
//! `details` line and `perform_action` behavior.
//!
//! ### Observer-style alerts
//! Each record owns an [`AlertChannel`](framework::AlertChannel). Subscribers are plain
//! callbacks, invoked in attachment order on a snapshot of the list. The registry subscribes
//! once per inserted record.
//!
//! ### Explicit statistics
//! Constructors take a [`StatisticsCounter`](framework::StatisticsCounter) and bump it only
//! after every field has been validated. The binary passes
//! [`StatisticsCounter::global`](framework::StatisticsCounter::global); tests use isolated
//! counters.
//!
//! ### Output boundary
//! Nothing prints directly. Records and the registry write lines to an
//! [`Output`](framework::Output); diagnostics go to `tracing` on stderr.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the record contract, alert channel, counter, errors and test mocks.
//! - [`model`] - the concrete record types.
//! - [`lifecycle`] - the registry, the sample roster and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Print the demo report
//! cargo run
//!
//! # Also show alerts and pass summaries on stderr
//! RUST_LOG=info cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
