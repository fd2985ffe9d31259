use anyhow::Result;
use dialoguer::{Input, Select};
use gantry_core::loader::Schedule;
use gantry_core::session::{Outcome, Session, UiEvent};
use gantry_core::view::{validate_window, ViewFilter};
use tracing::warn;

use crate::cli::BrowseCommand;
use crate::clipboard::SystemClipboard;
use crate::commands::Context;
use crate::parser::parse_date;
use crate::util::{notice_for, print_copied, print_notice};
use crate::views::gantt::GanttTable;

/// Menu driven session: each choice becomes one [`UiEvent`].
pub fn browse(schedule: &Schedule, command: BrowseCommand, ctx: &Context) -> Result<()> {
    let window_days = validate_window(ctx.config.window_days)?;
    let filter = ViewFilter {
        show_completed: command.all || ctx.config.show_completed,
        window_days,
        ..ViewFilter::default()
    };
    let mut session = Session::new(schedule, filter, ctx.tz);
    let mut chart = GanttTable::stdout(ctx.tz, ctx.now(), window_days);
    let mut clipboard = SystemClipboard;

    session.refresh(ctx.now(), &mut chart)?;

    loop {
        let Some(event) = prompt_event(&session, ctx)? else {
            break;
        };

        let now = ctx.now();
        chart.set_now(now);
        match session.handle(event, now, &mut chart, &mut clipboard) {
            Ok(Outcome::Rendered(_)) => {}
            Ok(Outcome::Copied(export)) => print_copied(&export),
            Err(err) => match notice_for(&err) {
                Some(message) => print_notice(&message),
                None => return Err(err.into()),
            },
        }
    }

    Ok(())
}

fn prompt_event(session: &Session<'_>, ctx: &Context) -> Result<Option<UiEvent>> {
    let filter = session.filter();
    let items = vec![
        format!(
            "[{}] Show completed",
            if filter.show_completed { "x" } else { " " }
        ),
        format!("Filter by name ({})", display_filter(&filter.name_filter)),
        "Copy a day's events".to_string(),
        "Quit".to_string(),
    ];

    let choice = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;

    let event = match choice {
        0 => UiEvent::CompletedToggled(!filter.show_completed),
        1 => {
            let text: String = Input::new()
                .with_prompt("Task name contains")
                .with_initial_text(filter.name_filter.clone())
                .allow_empty(true)
                .interact_text()?;
            UiEvent::NameFilterChanged(text)
        }
        2 => {
            let raw: String = Input::new()
                .with_prompt("Date (YYYY-MM-DD, today, tomorrow)")
                .allow_empty(true)
                .interact_text()?;
            let date = if raw.trim().is_empty() {
                None
            } else {
                match parse_date(&raw, ctx.now(), ctx.tz) {
                    Ok(date) => Some(date),
                    Err(e) => {
                        warn!(error = %e, "unreadable date");
                        print_notice(&e.to_string());
                        return prompt_event(session, ctx);
                    }
                }
            };
            UiEvent::CopyRequested(date)
        }
        _ => return Ok(None),
    };

    Ok(Some(event))
}

fn display_filter(name_filter: &str) -> &str {
    if name_filter.is_empty() {
        "none"
    } else {
        name_filter
    }
}
