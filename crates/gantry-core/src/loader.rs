use async_trait::async_trait;
use chrono_tz::Tz;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::error::CoreError;
use crate::models::{RawTask, Task};
use crate::recurrence::expand;

/// A named collection of task records that can be fetched asynchronously.
#[async_trait]
pub trait TaskSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch and parse every record, resolving timestamps in `tz`.
    async fn fetch(&self, tz: Tz) -> Result<Vec<Task>, CoreError>;
}

/// A JSON file holding an array of task records.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaskSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, tz: Tz) -> Result<Vec<Task>, CoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<RawTask> = serde_json::from_str(&contents)?;
        records
            .into_iter()
            .map(|raw| Task::from_raw(raw, tz))
            .collect()
    }
}

/// Task records already in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    tasks: Vec<Task>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }
}

#[async_trait]
impl TaskSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, _tz: Tz) -> Result<Vec<Task>, CoreError> {
        Ok(self.tasks.clone())
    }
}

/// The expanded task set for a session. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    tasks: Vec<Task>,
}

impl Schedule {
    /// Expands `tasks` and takes ownership of the result.
    pub fn from_tasks(tasks: Vec<Task>, tz: Tz) -> Result<Self, CoreError> {
        Ok(Self {
            tasks: expand(tasks, tz)?,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Wrap each path in a [`FileSource`].
pub fn file_sources<I, P>(paths: I) -> Vec<Arc<dyn TaskSource>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(|p| Arc::new(FileSource::new(p)) as Arc<dyn TaskSource>)
        .collect()
}

/// Every `*.json` file directly inside `dir`, sorted by file name.
pub async fn sources_from_dir(dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json && entry.file_type().await?.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Fetches every source concurrently and expands the merged result.
///
/// Tasks are merged in the order the sources are given. The first failing
/// source aborts the remaining fetches and fails the whole load.
pub async fn load_all(sources: Vec<Arc<dyn TaskSource>>, tz: Tz) -> Result<Schedule, CoreError> {
    let mut set = JoinSet::new();
    for (index, source) in sources.iter().cloned().enumerate() {
        set.spawn(async move {
            let result = source
                .fetch(tz)
                .await
                .map_err(|e| into_load_error(source.name(), e));
            (index, result)
        });
    }

    let mut batches: Vec<Option<Vec<Task>>> = vec![None; sources.len()];
    while let Some(joined) = set.join_next().await {
        let outcome = joined.map_err(|e| CoreError::Load {
            source_name: "<fetch task>".to_string(),
            reason: e.to_string(),
        });
        match outcome {
            Ok((index, Ok(tasks))) => {
                debug!(source = sources[index].name(), count = tasks.len(), "source loaded");
                batches[index] = Some(tasks);
            }
            Ok((_, Err(err))) | Err(err) => {
                set.abort_all();
                error!(error = %err, "error loading tasks");
                return Err(err);
            }
        }
    }

    let merged: Vec<Task> = batches.into_iter().flatten().flatten().collect();
    let schedule = Schedule::from_tasks(merged, tz).map_err(|err| {
        error!(error = %err, "error expanding tasks");
        err
    })?;
    info!(sources = sources.len(), tasks = schedule.len(), "schedule loaded");
    Ok(schedule)
}

fn into_load_error(source_name: &str, err: CoreError) -> CoreError {
    let reason = match err {
        CoreError::Load { .. } => return err,
        CoreError::Io(e) => e.to_string(),
        CoreError::Json(e) => e.to_string(),
        other => other.to_string(),
    };
    CoreError::Load {
        source_name: source_name.to_string(),
        reason,
    }
}
