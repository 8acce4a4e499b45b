use colored::*;
use foldersize_core::workflow::{Confirmer, DirectoryPicker};
use std::io::{self, Write};
use std::path::PathBuf;

/// Picker that asks for a path on stdin. An empty line cancels.
pub struct PromptPicker {
    start_dir: Option<String>,
}

impl PromptPicker {
    pub fn new(start_dir: Option<String>) -> Self {
        Self { start_dir }
    }
}

impl DirectoryPicker for PromptPicker {
    fn pick_directory(&self, title: &str) -> Option<PathBuf> {
        println!("{}", title.cyan());
        if let Some(start) = &self.start_dir {
            println!("{}", format!("(empty line cancels, e.g. {})", start).dimmed());
        } else {
            println!("{}", "(empty line cancels)".dimmed());
        }

        let line = read_line("Directory: ").ok()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

/// Picker that answers every request with a preset path, for `--dir`.
pub struct FixedPicker(pub PathBuf);

impl DirectoryPicker for FixedPicker {
    fn pick_directory(&self, _title: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Interactive y/N confirmation on stdin.
pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&self, message: &str) -> bool {
        prompt_confirm(message, Some(false)).unwrap_or(false)
    }
}

/// Confirmer for `--yes` runs; accepts everything.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

pub fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}

pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}
