use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::tempdir;

use foldersize_core::workflow::{
    bulk_rename, list_sizes, single_rename, Confirmer, DirectoryPicker, SingleReport,
    WorkflowOutcome,
};
use foldersize_core::{AppConfig, SilentReporter};

struct ScriptedPicker(Option<PathBuf>);

impl DirectoryPicker for ScriptedPicker {
    fn pick_directory(&self, _title: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}

struct ScriptedConfirmer {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedConfirmer {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Parent with two measurable subfolders and one already-tagged one.
fn create_parent(root: &Path) -> PathBuf {
    let parent = root.join("parent");
    let docs = parent.join("Docs");
    let media = parent.join("media");
    fs::create_dir_all(&docs).unwrap();
    fs::create_dir_all(&media).unwrap();
    fs::create_dir_all(parent.join("Old [2 KB]")).unwrap();

    fs::write(docs.join("one.bin"), vec![0u8; 500]).unwrap();
    fs::write(docs.join("two.bin"), vec![0u8; 600]).unwrap();
    fs::write(media.join("a.bin"), vec![0u8; 1536]).unwrap();
    parent
}

fn subfolder_names(parent: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(parent)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_list_sizes_reports_all_subfolders() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());

    let picker = ScriptedPicker(Some(parent.clone()));
    let outcome = list_sizes(&picker, &SilentReporter).unwrap();

    let report = match outcome {
        WorkflowOutcome::Completed(report) => report,
        WorkflowOutcome::Cancelled => panic!("unexpected cancellation"),
    };

    // Case-insensitive name order, tagged folders included.
    let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Docs", "media", "Old [2 KB]"]);
    assert_eq!(report.rows[0].label, "1.07 KB");
    assert_eq!(report.rows[1].label, "1.5 KB");
    assert_eq!(report.rows[2].label, "0 B");
    assert_eq!(report.items_skipped, 0);

    // Listing never mutates.
    assert_eq!(
        subfolder_names(&parent),
        vec!["Docs", "Old [2 KB]", "media"]
    );
}

#[test]
fn test_list_sizes_cancelled_when_nothing_picked() {
    let picker = ScriptedPicker(None);
    let outcome = list_sizes(&picker, &SilentReporter).unwrap();
    assert!(matches!(outcome, WorkflowOutcome::Cancelled));
}

#[test]
fn test_bulk_rename_full_run() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    let config = AppConfig::default();

    let picker = ScriptedPicker(Some(parent.clone()));
    let confirmer = ScriptedConfirmer::new(true);
    let outcome = bulk_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    let report = match outcome {
        WorkflowOutcome::Completed(report) => report,
        WorkflowOutcome::Cancelled => panic!("unexpected cancellation"),
    };

    assert_eq!(confirmer.times_asked(), 1);
    assert_eq!(report.renamed_count(), 2);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.already_tagged, vec!["Old [2 KB]".to_string()]);
    assert_eq!(
        subfolder_names(&parent),
        vec!["Docs [1.07 KB]", "Old [2 KB]", "media [1.5 KB]"]
    );
}

#[test]
fn test_bulk_rename_is_idempotent() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    let config = AppConfig::default();
    let picker = ScriptedPicker(Some(parent.clone()));

    let confirmer = ScriptedConfirmer::new(true);
    bulk_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();
    let after_first = subfolder_names(&parent);

    // Second run: everything is tagged now, so no rename is attempted and
    // no confirmation is requested.
    let confirmer = ScriptedConfirmer::new(true);
    let outcome = bulk_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    let report = match outcome {
        WorkflowOutcome::Completed(report) => report,
        WorkflowOutcome::Cancelled => panic!("unexpected cancellation"),
    };
    assert_eq!(confirmer.times_asked(), 0);
    assert!(report.outcomes.is_empty());
    assert_eq!(report.already_tagged.len(), 3);
    assert_eq!(subfolder_names(&parent), after_first);
}

#[test]
fn test_bulk_rename_declined_leaves_filesystem_untouched() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    let config = AppConfig::default();

    let before = subfolder_names(&parent);
    let picker = ScriptedPicker(Some(parent.clone()));
    let confirmer = ScriptedConfirmer::new(false);
    let outcome = bulk_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    assert!(matches!(outcome, WorkflowOutcome::Cancelled));
    assert_eq!(confirmer.times_asked(), 1);
    assert_eq!(subfolder_names(&parent), before);
}

#[test]
fn test_bulk_rename_on_missing_parent_is_an_error() {
    let tmp = tempdir().unwrap();
    let config = AppConfig::default();
    let picker = ScriptedPicker(Some(tmp.path().join("nope")));
    let confirmer = ScriptedConfirmer::new(true);

    let result = bulk_rename(&config, &picker, &confirmer, &SilentReporter);
    assert!(result.is_err());
}

#[test]
fn test_single_rename_full_run() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    let config = AppConfig::default();

    let picker = ScriptedPicker(Some(parent.join("Docs")));
    let confirmer = ScriptedConfirmer::new(true);
    let outcome = single_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    match outcome {
        WorkflowOutcome::Completed(SingleReport::Executed(rename)) => {
            assert!(rename.succeeded());
            assert_eq!(rename.item.new_name, "Docs [1.07 KB]");
        }
        other => panic!("expected executed rename, got {:?}", other),
    }
    assert!(parent.join("Docs [1.07 KB]").is_dir());
}

#[test]
fn test_single_rename_tagged_folder_reports_only() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    let config = AppConfig::default();

    let picker = ScriptedPicker(Some(parent.join("Old [2 KB]")));
    let confirmer = ScriptedConfirmer::new(true);
    let outcome = single_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    match outcome {
        WorkflowOutcome::Completed(SingleReport::AlreadyTagged { name, label, .. }) => {
            assert_eq!(name, "Old [2 KB]");
            assert_eq!(label, "0 B");
        }
        other => panic!("expected report-only mode, got {:?}", other),
    }
    // Never asked, never renamed.
    assert_eq!(confirmer.times_asked(), 0);
    assert!(parent.join("Old [2 KB]").is_dir());
}

#[test]
fn test_single_rename_declined_is_cancelled() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    let config = AppConfig::default();

    let picker = ScriptedPicker(Some(parent.join("Docs")));
    let confirmer = ScriptedConfirmer::new(false);
    let outcome = single_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    assert!(matches!(outcome, WorkflowOutcome::Cancelled));
    assert!(parent.join("Docs").is_dir());
}

#[test]
fn test_single_rename_collision_rejected_without_confirmation() {
    let tmp = tempdir().unwrap();
    let parent = create_parent(tmp.path());
    fs::create_dir(parent.join("Docs [1.07 KB]")).unwrap();
    let config = AppConfig::default();

    let picker = ScriptedPicker(Some(parent.join("Docs")));
    let confirmer = ScriptedConfirmer::new(true);
    let outcome = single_rename(&config, &picker, &confirmer, &SilentReporter).unwrap();

    match outcome {
        WorkflowOutcome::Completed(SingleReport::Rejected(item)) => {
            assert!(!item.is_accepted());
        }
        other => panic!("expected rejected proposal, got {:?}", other),
    }
    assert_eq!(confirmer.times_asked(), 0);
    assert!(parent.join("Docs").is_dir());
}
