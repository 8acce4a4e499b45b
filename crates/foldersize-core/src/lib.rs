pub mod config;
pub mod error;
pub mod executor;
pub mod format;
pub mod planner;
pub mod progress;
pub mod scanner;
pub mod tag;
pub mod workflow;

pub use config::AppConfig;
pub use error::Error;
pub use executor::{RenameFailure, RenameOutcome};
pub use format::{format_size, size_label, SizeLabel};
pub use planner::{RejectionReason, RenameCandidate, RenamePlan, RenamePlanItem};
pub use progress::{ProgressReporter, SilentReporter};
pub use scanner::DirSize;
pub use workflow::{
    BulkReport, Confirmer, DirectoryPicker, ListReport, SingleReport, WorkflowOutcome,
};
