//! Maintenance plans.
//!
//! The external commands are fixed, but instead of burying executable names in
//! the launch code each variant is an explicit list of steps handed to the
//! runner.

use crate::{PKILL_BIN, SNAP_BIN, STORE_PROCESS};

/// One external action: an executable plus its fixed argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
    /// Line printed to stdout before the child is spawned.
    pub announce: String,
    /// Whether the interactive pause follows this step's completion.
    pub pause_after: bool,
}

impl Step {
    fn refresh() -> Self {
        Self {
            program: SNAP_BIN.to_string(),
            args: vec!["refresh".to_string()],
            announce: "Refreshing snaps...".to_string(),
            pause_after: true,
        }
    }

    fn close_store() -> Self {
        Self {
            program: PKILL_BIN.to_string(),
            args: vec![STORE_PROCESS.to_string()],
            announce: "Closing the Snap Store...".to_string(),
            pause_after: false,
        }
    }
}

/// Ordered sequence of steps, run strictly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    /// Base variant: refresh installed snaps, then pause.
    pub fn refresh() -> Self {
        Self {
            steps: vec![Step::refresh()],
        }
    }

    /// Extended variant: close the store front end first, then refresh.
    pub fn full() -> Self {
        Self {
            steps: vec![Step::close_store(), Step::refresh()],
        }
    }
}
