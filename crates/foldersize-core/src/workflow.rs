use crate::config::AppConfig;
use crate::error::Error;
use crate::executor::{self, RenameOutcome};
use crate::format;
use crate::planner::{self, RenamePlanItem};
use crate::progress::ProgressReporter;
use crate::scanner::{self, DirSize};
use crate::tag;
use std::path::{Path, PathBuf};
use tracing::info;

/// Source of the directory a workflow operates on. `None` is a
/// user-initiated cancellation of the whole workflow, not an error.
pub trait DirectoryPicker {
    fn pick_directory(&self, title: &str) -> Option<PathBuf>;
}

/// Yes/no gate between planning and execution. `false` aborts the mutating
/// phase with no filesystem side effects.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug)]
pub enum WorkflowOutcome<T> {
    Cancelled,
    Completed(T),
}

#[derive(Debug)]
pub struct ListRow {
    pub name: String,
    pub size: DirSize,
    pub label: String,
}

#[derive(Debug)]
pub struct ListReport {
    pub parent: PathBuf,
    pub rows: Vec<ListRow>,
    pub items_skipped: u64,
}

#[derive(Debug)]
pub struct BulkReport {
    pub parent: PathBuf,
    pub already_tagged: Vec<String>,
    pub rejected: Vec<RenamePlanItem>,
    pub outcomes: Vec<RenameOutcome>,
    pub items_skipped: u64,
}

impl BulkReport {
    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.renamed_count()
    }
}

#[derive(Debug)]
pub enum SingleReport {
    /// The folder already carries a size tag; measured and reported only.
    AlreadyTagged {
        name: String,
        size: DirSize,
        label: String,
    },
    /// The proposal failed validation before any confirmation was asked.
    Rejected(RenamePlanItem),
    Executed(RenameOutcome),
}

/// List-only workflow: enumerate subfolders of a picked parent and measure
/// each one. No mutation occurs.
pub fn list_sizes(
    picker: &dyn DirectoryPicker,
    reporter: &dyn ProgressReporter,
) -> Result<WorkflowOutcome<ListReport>, Error> {
    let parent = match picker.pick_directory("Select parent folder to list subfolder sizes") {
        Some(parent) => parent,
        None => return Ok(WorkflowOutcome::Cancelled),
    };

    let mut candidates = planner::subfolder_candidates(&parent)?;
    candidates.sort_by_key(|c| c.name.to_lowercase());
    reporter.on_enumerate_complete(candidates.len());

    let total = candidates.len();
    let mut rows = Vec::with_capacity(total);
    let mut items_skipped = 0u64;

    for (index, candidate) in candidates.into_iter().enumerate() {
        reporter.on_measure_start(&candidate.name, index, total);
        let size = scanner::measure(&candidate.path);
        reporter.on_measure_complete(&candidate.name, &size);
        items_skipped += size.items_skipped;
        rows.push(ListRow {
            label: format::format_size(size.total_bytes),
            name: candidate.name,
            size,
        });
    }

    Ok(WorkflowOutcome::Completed(ListReport {
        parent,
        rows,
        items_skipped,
    }))
}

/// Bulk workflow: plan renames for every subfolder of a picked parent, ask
/// for one confirmation covering the whole batch, then execute fail-soft.
pub fn bulk_rename(
    config: &AppConfig,
    picker: &dyn DirectoryPicker,
    confirmer: &dyn Confirmer,
    reporter: &dyn ProgressReporter,
) -> Result<WorkflowOutcome<BulkReport>, Error> {
    let parent = match picker.pick_directory("Select parent folder containing subfolders to rename")
    {
        Some(parent) => parent,
        None => return Ok(WorkflowOutcome::Cancelled),
    };

    let candidates = planner::subfolder_candidates(&parent)?;
    reporter.on_enumerate_complete(candidates.len());

    let plan = planner::plan(candidates, config.max_path_len, reporter);
    let (accepted, rejected): (Vec<_>, Vec<_>) =
        plan.items.into_iter().partition(|item| item.is_accepted());

    if accepted.is_empty() {
        info!("No folders eligible for renaming under {}", parent.display());
        return Ok(WorkflowOutcome::Completed(BulkReport {
            parent,
            already_tagged: plan.already_tagged,
            rejected,
            outcomes: Vec::new(),
            items_skipped: plan.items_skipped,
        }));
    }

    reporter.on_plan_complete(&accepted);

    let message = format!(
        "Proceed with renaming {} folder(s) in {}? This cannot be easily undone.",
        accepted.len(),
        parent.display()
    );
    if !confirmer.confirm(&message) {
        info!("Rename operation cancelled by user");
        return Ok(WorkflowOutcome::Cancelled);
    }

    let outcomes = executor::execute(accepted, reporter);

    Ok(WorkflowOutcome::Completed(BulkReport {
        parent,
        already_tagged: plan.already_tagged,
        rejected,
        outcomes,
        items_skipped: plan.items_skipped,
    }))
}

/// Single-folder workflow: analyze one picked folder and rename it in place.
/// An already-tagged folder short-circuits into a report-only measurement.
pub fn single_rename(
    config: &AppConfig,
    picker: &dyn DirectoryPicker,
    confirmer: &dyn Confirmer,
    reporter: &dyn ProgressReporter,
) -> Result<WorkflowOutcome<SingleReport>, Error> {
    let target = match picker.pick_directory("Select folder to analyze and rename") {
        Some(target) => target,
        None => return Ok(WorkflowOutcome::Cancelled),
    };

    if !target.is_dir() {
        return Err(Error::NotADirectory(target));
    }

    let name = folder_name(&target);

    if tag::is_already_tagged(&name) {
        reporter.on_skipped_already_tagged(&name);
        reporter.on_measure_start(&name, 0, 1);
        let size = scanner::measure(&target);
        reporter.on_measure_complete(&name, &size);
        return Ok(WorkflowOutcome::Completed(SingleReport::AlreadyTagged {
            label: format::format_size(size.total_bytes),
            name,
            size,
        }));
    }

    reporter.on_measure_start(&name, 0, 1);
    let size = scanner::measure(&target);
    reporter.on_measure_complete(&name, &size);

    let item = planner::propose(&name, &target, size, config.max_path_len);
    if item.rejection.is_some() {
        reporter.on_plan_rejected(&item);
        return Ok(WorkflowOutcome::Completed(SingleReport::Rejected(item)));
    }

    let message = format!(
        "Rename '{}' to '{}' in {}?",
        item.old_name,
        item.new_name,
        target.parent().unwrap_or(Path::new("")).display()
    );
    if !confirmer.confirm(&message) {
        info!("Rename cancelled by user");
        return Ok(WorkflowOutcome::Cancelled);
    }

    let mut outcomes = executor::execute(vec![item], reporter);
    // execute() returns exactly one outcome for one item.
    let outcome = outcomes.remove(0);

    Ok(WorkflowOutcome::Completed(SingleReport::Executed(outcome)))
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
