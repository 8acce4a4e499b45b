use colored::*;
use foldersize_core::{
    BulkReport, ListReport, RejectionReason, RenameFailure, RenamePlanItem, SingleReport,
};

/// Print the list-workflow result as a three-column table.
pub fn print_list_report(report: &ListReport) {
    println!();
    println!(
        "{}",
        format!("Subfolders in {}", report.parent.display()).bold()
    );

    if report.rows.is_empty() {
        println!("{}", "No subfolders found in this directory.".yellow());
        return;
    }

    let name_width = report
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once("Folder Name".len()))
        .max()
        .unwrap_or(0);

    // Pad before coloring; ANSI escapes would otherwise count against the
    // column width.
    println!(
        "{}  {}  {}",
        format!("{:<name_width$}", "Folder Name").magenta().bold(),
        format!("{:>12}", "Size").magenta().bold(),
        "Status".magenta().bold(),
    );

    for row in &report.rows {
        let status = if row.size.items_skipped > 0 {
            format!("{} item(s) skipped", row.size.items_skipped)
                .yellow()
                .to_string()
        } else {
            "OK".dimmed().to_string()
        };
        println!(
            "{}  {}  {}",
            format!("{:<name_width$}", row.name).cyan(),
            format!("{:>12}", row.label).green(),
            status,
        );
    }

    print_skip_note(report.items_skipped);
}

/// Print the proposed renames for review before the batch confirmation.
pub fn print_plan_review(items: &[RenamePlanItem]) {
    println!();
    println!("{}", "Proposed renames (review carefully):".yellow().bold());
    for item in items {
        println!(
            "  {} {} {}",
            item.old_name.cyan(),
            "->".dimmed(),
            item.new_name.green(),
        );
    }
}

pub fn print_bulk_report(report: &BulkReport) {
    println!();
    println!("{}", "Rename summary".bold());
    println!(
        "  {} {}",
        "Successfully renamed:".green(),
        report.renamed_count().to_string().bold()
    );

    let failed = report.failed_count() + report.rejected.len();
    if failed > 0 {
        println!("  {} {}", "Failed/rejected:".red(), failed.to_string().bold());
        for item in &report.rejected {
            println!("    {} ({})", item.old_name.cyan(), rejection_text(item));
        }
        for outcome in report.outcomes.iter().filter(|o| !o.succeeded()) {
            println!(
                "    {} ({})",
                outcome.item.old_name.cyan(),
                failure_text(outcome.failure.as_ref())
            );
        }
    }

    if !report.already_tagged.is_empty() {
        println!(
            "  {} {}",
            "Skipped (already tagged):".yellow(),
            report.already_tagged.len().to_string().bold()
        );
    }

    print_skip_note(report.items_skipped);
}

pub fn print_single_report(report: &SingleReport) {
    println!();
    match report {
        SingleReport::AlreadyTagged { name, size, label } => {
            println!(
                "{}",
                format!("'{}' already carries a size tag.", name).yellow()
            );
            println!("Calculated size: {}", label.green().bold());
            print_skip_note(size.items_skipped);
        }
        SingleReport::Rejected(item) => {
            println!(
                "{}",
                format!("Cannot rename '{}': {}.", item.old_name, rejection_text(item)).yellow()
            );
            println!("Calculated size: {}", item.size_label.green().bold());
            print_skip_note(item.items_skipped);
        }
        SingleReport::Executed(outcome) => {
            if outcome.succeeded() {
                println!(
                    "Renamed {} {} {}",
                    outcome.item.old_name.cyan(),
                    "->".dimmed(),
                    outcome.item.new_name.green().bold()
                );
            } else {
                println!(
                    "{}",
                    format!(
                        "Failed to rename '{}': {}",
                        outcome.item.old_name,
                        failure_text(outcome.failure.as_ref())
                    )
                    .red()
                );
            }
            print_skip_note(outcome.item.items_skipped);
        }
    }
}

pub fn print_cancelled() {
    println!("{}", "Cancelled. Returning to menu.".yellow());
}

fn rejection_text(item: &RenamePlanItem) -> &'static str {
    match item.rejection {
        Some(RejectionReason::PathTooLong) => "resulting path too long",
        Some(RejectionReason::WouldCollide) => "target name already exists",
        None => "accepted",
    }
}

fn failure_text(failure: Option<&RenameFailure>) -> String {
    match failure {
        Some(RenameFailure::TargetExists) => "target appeared before rename".to_string(),
        Some(RenameFailure::Io(err)) => err.to_string(),
        None => "ok".to_string(),
    }
}

fn print_skip_note(items_skipped: u64) {
    if items_skipped > 0 {
        println!(
            "{}",
            format!(
                "Note: {} item(s) could not be accessed; sizes may be undercounts.",
                items_skipped
            )
            .yellow()
        );
    }
}
