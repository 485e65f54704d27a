//! Pipeline stage observation
//!
//! This module provides the `StageObserver` trait for following a scaffolding
//! run stage by stage, and a `TracingObserver` implementation that logs using
//! the `tracing` crate.

use crate::error::Error;
use crate::types::Stage;
use tracing::{debug, error};

/// Observer trait for pipeline stage events
///
/// All callbacks default to no-ops; implement the ones you care about.
///
/// # Example
///
/// ```rust
/// use layout_projects::{Stage, StageObserver};
///
/// struct Printer;
///
/// impl StageObserver for Printer {
///     fn on_stage_started(&self, stage: Stage) {
///         println!("-> {}", stage);
///     }
/// }
/// ```
pub trait StageObserver {
    /// Called before a stage runs
    fn on_stage_started(&self, _stage: Stage) {}

    /// Called after a stage completed successfully
    fn on_stage_finished(&self, _stage: Stage) {}

    /// Called when a stage failed; the run stops afterwards
    fn on_stage_failed(&self, _stage: Stage, _error: &Error) {}
}

/// Observer that logs stage transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StageObserver for TracingObserver {
    fn on_stage_started(&self, stage: Stage) {
        debug!("{}...", stage);
    }

    fn on_stage_finished(&self, stage: Stage) {
        debug!("{}: done", stage);
    }

    fn on_stage_failed(&self, stage: Stage, err: &Error) {
        error!("{} failed: {}", stage, err);
    }
}
