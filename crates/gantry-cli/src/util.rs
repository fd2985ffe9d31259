use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use gantry_core::error::CoreError;
use gantry_core::export::DayExport;
use gantry_core::loader::{file_sources, load_all, sources_from_dir, Schedule};
use gantry_core::view::MAX_WINDOW_DAYS;
use owo_colors::{OwoColorize, Style};

use crate::cli::Cli;
use crate::config::Config;

/// Task files named on the command line win over the configuration.
pub async fn resolve_sources(cli: &Cli, config: &Config) -> Result<Vec<PathBuf>> {
    let (mut sources, dir) = if !cli.sources.is_empty() || cli.dir.is_some() {
        (cli.sources.clone(), cli.dir.clone())
    } else {
        (config.sources.clone(), config.tasks_dir.clone())
    };

    if let Some(dir) = dir {
        sources.extend(sources_from_dir(&dir).await?);
    }

    if sources.is_empty() {
        return Err(anyhow!(
            "No task sources configured. Pass --source/--dir or set `sources` in gantry.toml."
        ));
    }
    Ok(sources)
}

pub async fn load_schedule(sources: Vec<PathBuf>, tz: Tz) -> Result<Schedule> {
    Ok(load_all(file_sources(sources), tz).await?)
}

/// The message shown to the user for errors that are expected during normal use.
pub fn notice_for(err: &CoreError) -> Option<String> {
    match err {
        CoreError::Selection => Some("Please choose a date first.".to_string()),
        CoreError::EmptyResult(date) => Some(format!("There are no events on {}.", date)),
        CoreError::InvalidWindow(days) => Some(format!(
            "Cannot show {} days ahead. Choose a window between 0 and {} days.",
            days, MAX_WINDOW_DAYS
        )),
        CoreError::Clipboard(_) => {
            Some("Copy failed. Use --print and copy the schedule manually.".to_string())
        }
        _ => None,
    }
}

pub fn print_notice(message: &str) {
    let notice_style = Style::new().yellow().bold();
    eprintln!("{} {}", "Notice:".style(notice_style), message);
}

pub fn print_copied(export: &DayExport) {
    let success_style = Style::new().green().bold();
    println!(
        "{} Copied {} event(s) for {} to the clipboard.",
        "✓".style(success_style),
        export.count,
        export.date.format("%Y-%m-%d").to_string().bright_white().bold()
    );
}
