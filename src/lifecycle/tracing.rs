//! # Observability & Tracing
//!
//! Diagnostics go through the `tracing` crate and are kept off the output boundary:
//! the subscriber writes to **stderr**, so stdout carries only record and alert lines.
//!
//! ## What Gets Traced
//!
//! - **Construction**: `Created` with entity type, id and the running total (`debug`)
//! - **Registry**: `Added` per insertion (`debug`), one span per bulk pass (`info`)
//! - **Alerts**: the variant's reason and the relayed message (`info`)
//! - **Rejected renames** (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Alerts and pass summaries only
//! RUST_LOG=info cargo run
//!
//! # Every construction and subscription
//! RUST_LOG=debug cargo run
//!
//! # Filter to the registry
//! RUST_LOG=hotel_registry::lifecycle=debug cargo run
//! ```
//!
//! With no `RUST_LOG` set the filter defaults to errors only and the demo prints just
//! its report.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
