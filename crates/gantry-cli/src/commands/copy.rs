use anyhow::Result;
use gantry_core::export::{copy_day, Clipboard};
use gantry_core::loader::Schedule;

use crate::cli::CopyCommand;
use crate::clipboard::{PrintClipboard, SystemClipboard};
use crate::commands::Context;
use crate::parser::parse_date;
use crate::util::print_copied;

pub fn copy_schedule(schedule: &Schedule, command: CopyCommand, ctx: &Context) -> Result<()> {
    let selected = command
        .date
        .as_deref()
        .map(|raw| parse_date(raw, ctx.now(), ctx.tz))
        .transpose()?;

    let mut clipboard: Box<dyn Clipboard> = if command.print {
        Box::new(PrintClipboard)
    } else {
        Box::new(SystemClipboard)
    };

    let export = copy_day(schedule.tasks(), selected, ctx.tz, clipboard.as_mut())?;
    if !command.print {
        print_copied(&export);
    }
    Ok(())
}
