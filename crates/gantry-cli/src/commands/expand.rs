use anyhow::Result;
use gantry_core::loader::Schedule;

pub fn print_expanded(schedule: &Schedule) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(schedule.tasks())?);
    Ok(())
}
