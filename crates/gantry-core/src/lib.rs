//! # Gantry Core Library
//!
//! Loads task collections, expands fixed-interval recurring tasks, measures
//! progress and derives the two views a user works with: a Gantt chart of the
//! upcoming window and a copyable schedule for a single day.
//!
//! ## Core Modules
//!
//! - [`models`]: Task records, repeat rules and chart decorations
//! - [`time`]: Timestamp parsing and calendar-day arithmetic in a timezone
//! - [`progress`]: Completion percentage and progress classes
//! - [`recurrence`]: Expansion of recurring tasks into concrete instances
//! - [`loader`]: Concurrent, fail-fast loading into an immutable [`loader::Schedule`]
//! - [`view`]: Visibility filtering and the chart renderer seam
//! - [`export`]: Day schedule formatting and the clipboard seam
//! - [`session`]: UI event handling over a loaded schedule
//! - [`error`]: Error type shared by all of the above
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gantry_core::{
//!     export::export_day,
//!     loader::{file_sources, load_all},
//!     time::local_date,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let tz = chrono_tz::Asia::Tokyo;
//!     let schedule = load_all(file_sources(["tasks/events.json"]), tz).await?;
//!
//!     let today = local_date(chrono::Utc::now(), tz);
//!     let export = export_day(schedule.tasks(), Some(today), tz)?;
//!     println!("{}", export.text);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod progress;
pub mod recurrence;
pub mod session;
pub mod time;
pub mod view;
