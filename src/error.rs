use std::io;
use thiserror::Error;

/// Errors raised while preparing or supervising a maintenance step.
///
/// A child that launches and then exits non-zero is not an error here; its
/// status is carried back to the caller and becomes the process exit code.
#[derive(Debug, Error)]
pub enum MaintenanceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("'{0}' not found in PATH")]
    ToolNotFound(String),
}
