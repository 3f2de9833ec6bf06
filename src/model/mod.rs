//! Concrete record types implementing the [`Record`](crate::framework::Record) trait.

pub mod employee;
pub mod guest;
pub mod room;

pub use employee::*;
pub use guest::*;
pub use room::*;
