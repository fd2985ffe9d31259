use anyhow::Result;
use gantry_core::loader::Schedule;
use gantry_core::view::{render, validate_window, ViewFilter};

use crate::cli::ShowCommand;
use crate::commands::Context;
use crate::views::gantt::GanttTable;

pub fn show_chart(schedule: &Schedule, command: ShowCommand, ctx: &Context) -> Result<()> {
    let filter = ViewFilter {
        show_completed: command.all || ctx.config.show_completed,
        name_filter: command.name.unwrap_or_default(),
        window_days: validate_window(command.window.unwrap_or(ctx.config.window_days))?,
    };
    let now = ctx.now();

    let mut chart = GanttTable::stdout(ctx.tz, now, filter.window_days);
    render(schedule, now, &filter, ctx.tz, &mut chart)?;
    Ok(())
}
