//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "peter")]
#[command(about = "Daily journaling/todo manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Question config file
    #[arg(long, global = true, default_value = ".peter", value_name = "PATH")]
    pub config: PathBuf,

    /// Markdown todo store file
    #[arg(long, global = true, default_value = "peter.md", value_name = "PATH")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the configured questions and record today's todos
    Run,

    /// Show open todos (not completed, with a real answer)
    List,

    /// Show all recorded todos with their completion state
    Status,

    /// Select open todos and mark them completed
    Close,
}
