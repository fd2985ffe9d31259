use clap::Parser;
use gantry_core::error::CoreError;
use gantry_core::time::parse_timezone;
use owo_colors::{OwoColorize, Style};

mod cli;
mod clipboard;
mod commands;
mod config;
mod logging;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init_logging();

    if let Err(e) = run(cli).await {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = config::Config::load(cli.config.as_deref())?;
    let tz = parse_timezone(cli.timezone.as_deref().unwrap_or(&config.timezone))?;
    let now_override = cli
        .now
        .as_deref()
        .map(|raw| parser::parse_now(Some(raw), tz))
        .transpose()?;

    let sources = util::resolve_sources(&cli, &config).await?;
    // Handlers only run once the whole schedule is in memory.
    let schedule = util::load_schedule(sources, tz).await?;

    let ctx = commands::Context {
        tz,
        now_override,
        config,
    };

    match cli.command {
        cli::Commands::Show(command) => commands::show::show_chart(&schedule, command, &ctx),
        cli::Commands::Copy(command) => commands::copy::copy_schedule(&schedule, command, &ctx),
        cli::Commands::Expand => commands::expand::print_expanded(&schedule),
        cli::Commands::Browse(command) => commands::browse::browse(&schedule, command, &ctx),
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        if let Some(message) = util::notice_for(core_error) {
            util::print_notice(&message);
            return;
        }
        match core_error {
            CoreError::Load { .. } => {
                eprintln!("{} {}", "Error:".style(error_style), core_error);
                eprintln!("No chart was drawn. Check the task files and try again.");
            }
            CoreError::InvalidRecurrence { id, interval } => {
                eprintln!(
                    "{} Task '{}' repeats every {} days; the interval must be at least 1.",
                    "Error:".style(error_style),
                    id.yellow(),
                    interval
                );
            }
            CoreError::InvalidTimezone(tz) => {
                eprintln!(
                    "{} Invalid timezone '{}'. Use IANA names like 'Asia/Tokyo'.",
                    "Error:".style(error_style),
                    tz.yellow()
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else if let Some(figment_error) = err.downcast_ref::<figment::Error>() {
        eprintln!(
            "{} Invalid configuration: {}",
            "Error:".style(error_style),
            figment_error
        );
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
