use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "foldersize")]
#[command(about = "Measure folder sizes and tag folder names with them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List subfolders of a directory with their aggregate sizes
    List {
        /// Parent directory (prompted for when omitted)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Rename every untagged subfolder to include its size
    RenameAll {
        /// Parent directory (prompted for when omitted)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Analyze a single folder and rename it to include its size
    RenameOne {
        /// Target directory (prompted for when omitted)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print configuration values
    PrintConfig,
}
