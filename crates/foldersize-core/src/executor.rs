use crate::planner::RenamePlanItem;
use crate::progress::ProgressReporter;
use std::fs;
use tracing::{error, info};

/// Why a single rename failed at execute time.
#[derive(Debug)]
pub enum RenameFailure {
    /// The target appeared between plan time and execute time.
    TargetExists,
    Io(std::io::Error),
}

#[derive(Debug)]
pub struct RenameOutcome {
    pub item: RenamePlanItem,
    pub failure: Option<RenameFailure>,
}

impl RenameOutcome {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// Apply accepted plan items one at a time, in order.
///
/// Each rename re-checks the target immediately beforehand; the interactive
/// confirmation between planning and execution leaves an unbounded window in
/// which another process may have created the target. A failed item is
/// recorded and the batch continues. No retries, no rollback.
pub fn execute(
    items: Vec<RenamePlanItem>,
    reporter: &dyn ProgressReporter,
) -> Vec<RenameOutcome> {
    let mut outcomes = Vec::with_capacity(items.len());

    for item in items {
        debug_assert!(item.is_accepted());

        let failure = if item.new_path.exists() {
            error!(
                "Cannot rename '{}': target '{}' already exists",
                item.old_name, item.new_name
            );
            Some(RenameFailure::TargetExists)
        } else {
            match fs::rename(&item.old_path, &item.new_path) {
                Ok(()) => {
                    info!("Renamed '{}' -> '{}'", item.old_name, item.new_name);
                    None
                }
                Err(err) => {
                    error!(
                        "Error renaming '{}' to '{}': {}",
                        item.old_name, item.new_name, err
                    );
                    Some(RenameFailure::Io(err))
                }
            }
        };

        let outcome = RenameOutcome { item, failure };
        reporter.on_rename_outcome(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}
