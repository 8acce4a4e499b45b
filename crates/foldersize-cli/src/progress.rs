use foldersize_core::{DirSize, ProgressReporter, RenameOutcome, RenamePlanItem};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// CLI progress reporter using indicatif.
///
/// The measuring phase gets a progress bar (candidate count is known after
/// enumeration); everything else is printed as per-item lines so it survives
/// above the live bar.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            f(pb);
        }
    }

    pub fn finish(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for CliReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for CliReporter {
    fn on_enumerate_complete(&self, subfolders: usize) {
        eprintln!("Found {} subfolder(s).", subfolders);
        if subfolders == 0 {
            return;
        }
        let pb = ProgressBar::new(subfolders as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "  {spinner:.cyan} Measuring [{bar:30.cyan/dim}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("━╸─")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        let mut guard = self.bar.lock().unwrap();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn on_measure_start(&self, name: &str, _index: usize, _total: usize) {
        self.with_bar(|pb| pb.set_message(name.to_string()));
    }

    fn on_measure_complete(&self, _name: &str, size: &DirSize) {
        self.with_bar(|pb| {
            pb.inc(1);
            if size.items_skipped > 0 {
                pb.println(format!("    {} item(s) skipped", size.items_skipped));
            }
        });
    }

    fn on_skipped_already_tagged(&self, name: &str) {
        self.with_bar(|pb| pb.inc(1));
        eprintln!("  - Skipping '{}' (already tagged)", name);
    }

    fn on_plan_rejected(&self, item: &RenamePlanItem) {
        eprintln!(
            "  - Cannot rename '{}': {}",
            item.old_name,
            match item.rejection {
                Some(foldersize_core::RejectionReason::PathTooLong) => "resulting path too long",
                Some(foldersize_core::RejectionReason::WouldCollide) => "target name already exists",
                None => "rejected",
            }
        );
    }

    fn on_plan_complete(&self, accepted: &[RenamePlanItem]) {
        self.finish();
        crate::render::print_plan_review(accepted);
    }

    fn on_rename_outcome(&self, outcome: &RenameOutcome) {
        if outcome.succeeded() {
            eprintln!(
                "  \x1b[32m✓\x1b[0m Renamed '{}' -> '{}'",
                outcome.item.old_name, outcome.item.new_name
            );
        } else {
            eprintln!(
                "  \x1b[31m✗\x1b[0m Failed to rename '{}'",
                outcome.item.old_name
            );
        }
    }
}
