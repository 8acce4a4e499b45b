mod commands;
mod logging;
mod progress;
mod prompt;
mod render;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use foldersize_core::workflow::{self, Confirmer, DirectoryPicker, WorkflowOutcome};
use foldersize_core::{AppConfig, Error};
use progress::CliReporter;
use prompt::{read_line, AssumeYes, FixedPicker, PromptConfirmer, PromptPicker};
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match foldersize_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::List { dir }) => {
            if let Err(err) = run_list(&config, dir) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::RenameAll { dir, yes }) => {
            if let Err(err) = run_bulk_rename(&config, dir, yes) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::RenameOne { dir, yes }) => {
            if let Err(err) = run_single_rename(&config, dir, yes) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => menu_loop(&config),
    }

    Ok(())
}

/// Interactive menu: one workflow per choice, back to the menu afterwards.
/// Workflow errors are reported and the loop survives.
fn menu_loop(config: &AppConfig) {
    loop {
        println!();
        println!("{}", "Folder Size Utility".magenta().bold());
        println!("  {} List sizes of subfolders in a directory", "1.".cyan());
        println!(
            "  {} Rename subfolders with size ({})",
            "2.".cyan(),
            "use caution!".yellow()
        );
        println!("  {} Analyze & rename a single folder", "3.".cyan());
        println!("  {} Exit", "4.".red());

        let choice = match read_line("Enter your choice (1-4): ") {
            Ok(line) => line,
            Err(err) => {
                error!("Error reading input: {}", err);
                return;
            }
        };

        let result = match choice.trim() {
            "1" => run_list(config, None),
            "2" => run_bulk_rename(config, None, false),
            "3" => run_single_rename(config, None, false),
            "4" => {
                println!("{}", "Exiting.".blue());
                return;
            }
            _ => {
                println!("{}", "Invalid choice. Please enter 1, 2, 3, or 4.".red());
                continue;
            }
        };

        if let Err(err) = result {
            error!("Error: {}", err);
        }
    }
}

fn make_picker(config: &AppConfig, dir: Option<PathBuf>) -> Box<dyn DirectoryPicker> {
    match dir {
        Some(dir) => Box::new(FixedPicker(dir)),
        None => Box::new(PromptPicker::new(config.start_dir.clone())),
    }
}

fn make_confirmer(yes: bool) -> Box<dyn Confirmer> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(PromptConfirmer)
    }
}

fn run_list(config: &AppConfig, dir: Option<PathBuf>) -> Result<(), Error> {
    let picker = make_picker(config, dir);
    let reporter = CliReporter::new();
    let outcome = workflow::list_sizes(picker.as_ref(), &reporter);
    reporter.finish();

    match outcome? {
        WorkflowOutcome::Cancelled => render::print_cancelled(),
        WorkflowOutcome::Completed(report) => render::print_list_report(&report),
    }
    Ok(())
}

fn run_bulk_rename(config: &AppConfig, dir: Option<PathBuf>, yes: bool) -> Result<(), Error> {
    println!(
        "{} This will rename subfolders of the selected directory.",
        "Warning:".yellow().bold()
    );

    let picker = make_picker(config, dir);
    let confirmer = make_confirmer(yes);
    let reporter = CliReporter::new();
    let outcome = workflow::bulk_rename(config, picker.as_ref(), confirmer.as_ref(), &reporter);
    reporter.finish();

    match outcome? {
        WorkflowOutcome::Cancelled => render::print_cancelled(),
        WorkflowOutcome::Completed(report) => render::print_bulk_report(&report),
    }
    Ok(())
}

fn run_single_rename(config: &AppConfig, dir: Option<PathBuf>, yes: bool) -> Result<(), Error> {
    let picker = make_picker(config, dir);
    let confirmer = make_confirmer(yes);
    let reporter = CliReporter::new();
    let outcome = workflow::single_rename(config, picker.as_ref(), confirmer.as_ref(), &reporter);
    reporter.finish();

    match outcome? {
        WorkflowOutcome::Cancelled => render::print_cancelled(),
        WorkflowOutcome::Completed(report) => render::print_single_report(&report),
    }
    Ok(())
}
