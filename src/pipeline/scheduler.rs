// src/pipeline/scheduler.rs

//! Periodic ingestion scheduling.
//!
//! The scheduler owns an explicit `Idle`/`Running` state; run start and run
//! end are the only transitions, and a tick that lands while a run is in
//! progress is dropped, never queued. Errors stop at the run boundary.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::{Config, SchedulerConfig};
use crate::pipeline::ingest::run_ingest_once;
use crate::services::NewsScraper;
use crate::storage::ArticleStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
}

/// Re-entrancy guard. Advisory in-process state, not a distributed lock.
#[derive(Debug)]
struct SchedulerState(Mutex<RunState>);

impl SchedulerState {
    fn new() -> Self {
        Self(Mutex::new(RunState::Idle))
    }

    /// Claim the run slot; `false` means a run is already in progress.
    fn try_begin(&self) -> bool {
        let mut state = self.0.lock().unwrap_or_else(|e| e.into_inner());
        if *state == RunState::Running {
            return false;
        }
        *state = RunState::Running;
        true
    }

    fn end(&self) {
        let mut state = self.0.lock().unwrap_or_else(|e| e.into_inner());
        *state = RunState::Idle;
    }
}

/// Handle to a started scheduler.
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Stop future ticks. An in-flight run is left to finish.
    pub fn stop(self) {
        self.task.abort();
    }
}

/// Start the periodic ingestion scheduler.
///
/// Runs once immediately, then on every `interval_ms` tick.
pub fn start_scheduler(
    scraper: Arc<NewsScraper>,
    store: Arc<dyn ArticleStore>,
    config: &Config,
) -> SchedulerHandle {
    let scheduler_config = config.scheduler.clone();
    let state = Arc::new(SchedulerState::new());

    log::info!(
        "Ingest scheduler started: interval_ms={} limit={} concurrency={}",
        scheduler_config.interval_ms,
        scheduler_config.limit,
        scheduler_config.concurrency
    );

    let task = tokio::spawn(async move {
        let mut ticker =
            tokio::time::interval(Duration::from_millis(scheduler_config.interval_ms.max(1)));
        loop {
            ticker.tick().await;

            let scraper = Arc::clone(&scraper);
            let store = Arc::clone(&store);
            let state = Arc::clone(&state);
            let config = scheduler_config.clone();
            tokio::spawn(async move {
                run_guarded(&state, &scraper, store.as_ref(), &config).await;
            });
        }
    });

    SchedulerHandle { task }
}

async fn run_guarded(
    state: &SchedulerState,
    scraper: &NewsScraper,
    store: &dyn ArticleStore,
    config: &SchedulerConfig,
) {
    if !state.try_begin() {
        log::debug!("Ingest run already in progress; tick dropped");
        return;
    }

    if let Err(error) = run_ingest_once(scraper, store, config).await {
        log::error!("Ingest run failed: {error}");
    }

    state.end();
}
