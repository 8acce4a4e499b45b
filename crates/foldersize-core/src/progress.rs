use crate::executor::RenameOutcome;
use crate::planner::RenamePlanItem;
use crate::scanner::DirSize;

/// Trait for reporting workflow progress.
///
/// CLI implements with tracing/indicatif, tests capture events or stay
/// silent. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_enumerate_complete(&self, _subfolders: usize) {}
    fn on_measure_start(&self, _name: &str, _index: usize, _total: usize) {}
    fn on_measure_complete(&self, _name: &str, _size: &DirSize) {}
    fn on_skipped_already_tagged(&self, _name: &str) {}
    fn on_plan_rejected(&self, _item: &RenamePlanItem) {}
    /// Accepted items, ready for review; fires before any confirmation.
    fn on_plan_complete(&self, _accepted: &[RenamePlanItem]) {}
    fn on_rename_outcome(&self, _outcome: &RenameOutcome) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
