//! Confkit Core Crate
//!
//! Shared error taxonomy and result alias used by the snapshot and
//! reconciliation crates.

pub mod error;

pub use error::{Result, SettingsError};
