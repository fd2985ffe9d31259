use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gantt charts and copyable day schedules for recurring event files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Task file to load (repeatable). Replaces the configured sources
    #[arg(short, long = "source", global = true)]
    pub sources: Vec<PathBuf>,

    /// Load every *.json file in this directory
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Timezone for reading and displaying times (IANA format, e.g. 'Asia/Tokyo')
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// Override the current time (e.g. '2024-06-10T08:00')
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Configuration file to read instead of ./gantry.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show upcoming tasks as a Gantt chart
    Show(ShowCommand),
    /// Copy the schedule of one day to the clipboard
    Copy(CopyCommand),
    /// Print the expanded task set as JSON
    Expand,
    /// Interactively filter the chart and copy days
    Browse(BrowseCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// Include tasks that already ended
    #[clap(short, long)]
    pub all: bool,
    /// Only show tasks whose name contains this text (case-insensitive)
    #[clap(short, long)]
    pub name: Option<String>,
    /// How many days ahead to show
    #[clap(short, long)]
    pub window: Option<i64>,
}

#[derive(Parser, Debug, Clone)]
pub struct CopyCommand {
    /// The day to copy (e.g. '2024-06-10', 'today', 'tomorrow')
    pub date: Option<String>,
    /// Print the schedule instead of copying it
    #[clap(short, long)]
    pub print: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct BrowseCommand {
    /// Start with ended tasks shown
    #[clap(short, long)]
    pub all: bool,
}
