use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Aggregate result of one directory measurement.
///
/// `total_bytes` covers only regular files that could be stat'd;
/// `items_skipped` counts every entry (file or whole subtree listing) that
/// could not be accessed, at any depth. A non-zero skip count is the only
/// signal that the total may be an undercount.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirSize {
    pub total_bytes: u64,
    pub items_skipped: u64,
}

/// Recursively sum file sizes under `dir`, tolerating partial failures.
///
/// Never fails: an unreadable directory (including `dir` itself) charges one
/// skip and is otherwise ignored, an unreadable file charges one skip, and
/// processing always continues with siblings and ancestors. Symlinks are
/// inert — neither traversed, summed, nor charged.
pub fn measure(dir: &Path) -> DirSize {
    let mut acc = DirSize::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Cannot read directory {}: {}", dir.display(), err);
            acc.items_skipped += 1;
            return acc;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Unreadable entry in {}: {}", dir.display(), err);
                acc.items_skipped += 1;
                continue;
            }
        };

        // file_type() does not follow symlinks.
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                debug!("Cannot classify {}: {}", entry.path().display(), err);
                acc.items_skipped += 1;
                continue;
            }
        };

        if file_type.is_dir() {
            let sub = measure(&entry.path());
            acc.total_bytes += sub.total_bytes;
            acc.items_skipped += sub.items_skipped;
        } else if file_type.is_file() {
            match entry.metadata() {
                Ok(metadata) => acc.total_bytes += metadata.len(),
                Err(err) => {
                    debug!("Cannot stat {}: {}", entry.path().display(), err);
                    acc.items_skipped += 1;
                }
            }
        }
    }

    acc
}
