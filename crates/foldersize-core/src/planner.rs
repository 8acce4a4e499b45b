use crate::error::Error;
use crate::format;
use crate::progress::ProgressReporter;
use crate::scanner::{self, DirSize};
use crate::tag;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A subdirectory considered for tagging, captured at scan time.
#[derive(Debug, Clone)]
pub struct RenameCandidate {
    pub name: String,
    pub path: PathBuf,
    pub already_tagged: bool,
}

/// Why a proposed rename was excluded from the executable plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    PathTooLong,
    WouldCollide,
}

#[derive(Debug, Clone)]
pub struct RenamePlanItem {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
    pub size_label: String,
    pub items_skipped: u64,
    pub rejection: Option<RejectionReason>,
}

impl RenamePlanItem {
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

#[derive(Debug, Default)]
pub struct RenamePlan {
    /// Accepted and rejected items, in case-insensitive name order.
    pub items: Vec<RenamePlanItem>,
    /// Names excluded up front because they already carry a size tag.
    pub already_tagged: Vec<String>,
    /// Entries that could not be accessed across all measured candidates.
    pub items_skipped: u64,
}

impl RenamePlan {
    pub fn accepted(&self) -> impl Iterator<Item = &RenamePlanItem> {
        self.items.iter().filter(|item| item.is_accepted())
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }
}

/// Enumerate the immediate subdirectories of `parent` as rename candidates.
/// Symlinks are not candidates. A listing failure of `parent` itself is a
/// workflow-level error and propagates.
pub fn subfolder_candidates(parent: &Path) -> Result<Vec<RenameCandidate>, Error> {
    if !parent.is_dir() {
        return Err(Error::NotADirectory(parent.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(parent)? {
        // Per-entry failures are skipped, matching the aggregator; only the
        // parent listing itself is allowed to fail the workflow.
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Unreadable entry under {}: {}", parent.display(), err);
                continue;
            }
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                debug!("Cannot classify {}: {}", entry.path().display(), err);
                continue;
            }
        };
        if file_type.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            candidates.push(RenameCandidate {
                already_tagged: tag::is_already_tagged(&name),
                path: entry.path(),
                name,
            });
        }
    }
    Ok(candidates)
}

/// Build the rename plan for a set of sibling candidates.
///
/// Candidates are processed in case-insensitive name order. Already-tagged
/// candidates are excluded entirely; the rest are measured and checked
/// against the path-length budget and plan-time collisions. The planner
/// never mutates the filesystem.
pub fn plan(
    mut candidates: Vec<RenameCandidate>,
    max_path_len: usize,
    reporter: &dyn ProgressReporter,
) -> RenamePlan {
    candidates.sort_by_key(|c| c.name.to_lowercase());

    let mut result = RenamePlan::default();
    let total = candidates.len();

    for (index, candidate) in candidates.into_iter().enumerate() {
        if candidate.already_tagged {
            debug!("Skipping already tagged folder: {}", candidate.name);
            reporter.on_skipped_already_tagged(&candidate.name);
            result.already_tagged.push(candidate.name);
            continue;
        }

        reporter.on_measure_start(&candidate.name, index, total);
        let size = scanner::measure(&candidate.path);
        reporter.on_measure_complete(&candidate.name, &size);
        result.items_skipped += size.items_skipped;

        let item = propose(&candidate.name, &candidate.path, size, max_path_len);
        if let Some(reason) = item.rejection {
            debug!("Rejecting {} ({:?})", candidate.name, reason);
            reporter.on_plan_rejected(&item);
        }
        result.items.push(item);
    }

    result
}

/// Build a single plan item for an already-measured directory.
pub fn propose(name: &str, path: &Path, size: DirSize, max_path_len: usize) -> RenamePlanItem {
    let size_label = format::format_size(size.total_bytes);
    let new_name = format!("{} [{}]", name, size_label);
    let new_path = path.with_file_name(&new_name);

    let rejection = if new_path.to_string_lossy().chars().count() > max_path_len {
        Some(RejectionReason::PathTooLong)
    } else if new_path.exists() {
        Some(RejectionReason::WouldCollide)
    } else {
        None
    };

    RenamePlanItem {
        old_path: path.to_path_buf(),
        new_path,
        old_name: name.to_string(),
        new_name,
        size_label,
        items_skipped: size.items_skipped,
        rejection,
    }
}
