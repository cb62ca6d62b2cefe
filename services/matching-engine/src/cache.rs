//! Dataset cache
//!
//! Process-wide holder of the epitope dataset, populated lazily from an
//! [`EpitopeSource`]. The cache moves through
//! `Uninitialized -> Loading -> Ready` and stays `Ready` for its lifetime.
//!
//! Double-checked locking: `phase` is read without the lock on every call.
//! Only callers that see "not ready" take `transition`, re-check, and load.
//! The mutex guards the transition, never steady-state reads.
//!
//! A failed load is handed to every caller that was already waiting on it.
//! The next call after that failure starts a fresh load. A panicking
//! source counts as a failed load.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

use tracing::{debug, info, warn};
use types::errors::LoadError;

use crate::dataset::Dataset;
use crate::source::EpitopeSource;

const UNINITIALIZED: u8 = 0;
const LOADING: u8 = 1;
const READY: u8 = 2;

/// Lifecycle of the dataset cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Uninitialized,
    Loading,
    Ready,
}

/// Load counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub load_attempts: u64,
    pub load_failures: u64,
}

/// Outcome of a failed load, kept until the next attempt
struct FailedLoad {
    /// Value of `completed_loads` once this load finished
    generation: u64,
    error: LoadError,
}

/// State touched only while holding the transition lock
#[derive(Default)]
struct Transition {
    last_failure: Option<FailedLoad>,
}

/// Lazily loaded, concurrency-safe epitope dataset
pub struct DatasetCache {
    source: Arc<dyn EpitopeSource>,
    /// Readiness flag, read lock-free on the hot path
    phase: AtomicU8,
    transition: Mutex<Transition>,
    dataset: OnceLock<Dataset>,
    /// Finished load attempts, successful or not
    completed_loads: AtomicU64,
    load_attempts: AtomicU64,
    load_failures: AtomicU64,
}

impl DatasetCache {
    pub fn new(source: Arc<dyn EpitopeSource>) -> Self {
        Self {
            source,
            phase: AtomicU8::new(UNINITIALIZED),
            transition: Mutex::new(Transition::default()),
            dataset: OnceLock::new(),
            completed_loads: AtomicU64::new(0),
            load_attempts: AtomicU64::new(0),
            load_failures: AtomicU64::new(0),
        }
    }

    /// Return the dataset, loading it first if needed
    ///
    /// Idempotent and safe to call from many threads. At most one caller
    /// fetches from the source at a time; the rest block on the transition
    /// lock and then either see the loaded dataset or the same failure.
    pub fn ensure_loaded(&self) -> Result<&Dataset, LoadError> {
        if self.phase.load(Ordering::Acquire) == READY {
            if let Some(dataset) = self.dataset.get() {
                return Ok(dataset);
            }
        }

        let observed = self.completed_loads.load(Ordering::Acquire);
        // `Transition` is only written after a load completes, so a
        // poisoned guard still holds consistent state
        let mut transition = self
            .transition
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished while we waited
        if let Some(dataset) = self.dataset.get() {
            return Ok(dataset);
        }
        if let Some(failure) = &transition.last_failure {
            if failure.generation > observed {
                debug!(
                    generation = failure.generation,
                    "Reporting failure of the load this caller waited on"
                );
                return Err(failure.error.clone());
            }
        }

        self.phase.store(LOADING, Ordering::Release);
        self.load_attempts.fetch_add(1, Ordering::Relaxed);

        let source = self.source.describe();
        info!(source = %source, "Loading epitope dataset");
        let started = Instant::now();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| Dataset::load(self.source.as_ref())))
            .unwrap_or_else(|payload| {
                Err(LoadError::unavailable(format!(
                    "source panicked: {}",
                    panic_message(payload.as_ref())
                )))
            });
        let generation = self.completed_loads.fetch_add(1, Ordering::AcqRel) + 1;

        match outcome {
            Ok(dataset) => {
                info!(
                    source = %source,
                    epitopes = dataset.len(),
                    alleles = dataset.allele_catalog().len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Epitope dataset ready"
                );
                transition.last_failure = None;
                let dataset = self.dataset.get_or_init(|| dataset);
                self.phase.store(READY, Ordering::Release);
                Ok(dataset)
            }
            Err(error) => {
                self.load_failures.fetch_add(1, Ordering::Relaxed);
                warn!(
                    source = %source,
                    error = %error,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Epitope dataset load failed"
                );
                transition.last_failure = Some(FailedLoad {
                    generation,
                    error: error.clone(),
                });
                self.phase.store(UNINITIALIZED, Ordering::Release);
                Err(error)
            }
        }
    }

    /// The dataset if already loaded; never triggers a load
    pub fn get(&self) -> Option<&Dataset> {
        if self.is_ready() {
            self.dataset.get()
        } else {
            None
        }
    }

    pub fn state(&self) -> CacheState {
        match self.phase.load(Ordering::Acquire) {
            READY => CacheState::Ready,
            LOADING => CacheState::Loading,
            _ => CacheState::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase.load(Ordering::Acquire) == READY
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            load_attempts: self.load_attempts.load(Ordering::Relaxed),
            load_failures: self.load_failures.load(Ordering::Relaxed),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

impl std::fmt::Debug for DatasetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetCache")
            .field("source", &self.source.describe())
            .field("state", &self.state())
            .field("stats", &self.stats())
            .finish()
    }
}
