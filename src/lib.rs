//! Snapup library
//!
//! Sequential orchestration of snap maintenance commands: close the Snap Store
//! front end, refresh installed snaps, and pause for the user after the refresh.

pub mod cli;
pub mod error;
pub mod plan;
pub mod prompt;
pub mod runner;
pub mod signal;

// Re-export commonly used types for convenience
pub use error::MaintenanceError;
pub use plan::{Plan, Step};

/// Executable that performs the package refresh.
pub const SNAP_BIN: &str = "snap";
/// Executable used to close the store front end.
pub const PKILL_BIN: &str = "pkill";
/// Process name the terminate step matches against.
pub const STORE_PROCESS: &str = "snap-store";
