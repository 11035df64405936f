//! Pipeline entry points for wordwatch operations.
//!
//! - `run_ingest_once`: one listing-to-upsert ingestion pass
//! - `start_scheduler`: periodic ingestion with a re-entrancy guard
//! - `stats`: word appearance queries against the stored corpus

pub mod ingest;
pub mod scheduler;
pub mod stats;

pub use ingest::{IngestOutcome, run_ingest_once};
pub use scheduler::{SchedulerHandle, start_scheduler};
pub use stats::{appearances_for_text, appearances_for_word};
