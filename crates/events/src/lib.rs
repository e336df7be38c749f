//! Change-notification infrastructure for the plategate dashboard.
//!
//! The dashboard does not receive changed rows; it receives a signal that a
//! resource table changed and re-fetches. This crate provides:
//!
//! - [`ChangeBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ChangeEvent`] — the signal envelope, keyed by resource-table name.

pub mod bus;

pub use bus::{ChangeBus, ChangeEvent};
