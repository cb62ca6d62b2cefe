//! Concurrency tests for the dataset cache
//!
//! Many threads racing on a cold cache must trigger a single upstream
//! fetch and all see the same outcome.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use matching_engine::{CacheState, DatasetCache, EpitopeMatcher, EpitopeSource};
use types::epitope::EpitopeRow;
use types::errors::LoadError;
use types::query::AlleleQuery;

const THREADS: usize = 16;

/// Slow source that counts fetches and optionally fails every one
struct CountingSource {
    fail: bool,
    delay: Duration,
    fetches: AtomicUsize,
}

impl CountingSource {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            delay: Duration::from_millis(200),
            fetches: AtomicUsize::new(0),
        }
    }
}

impl EpitopeSource for CountingSource {
    fn fetch_epitopes(&self) -> Result<Vec<EpitopeRow>, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        if self.fail {
            return Err(LoadError::unavailable("warehouse unreachable"));
        }

        Ok((0..100)
            .map(|i| EpitopeRow {
                id: format!("E{i}"),
                name: format!("E{i}"),
                locus: "B".to_string(),
                alleles: vec![format!("A{}", i % 10), format!("A{}", (i + 1) % 10)],
                required_alleles: vec![format!("B{}", i % 3)],
            })
            .collect())
    }

    fn fetch_allele_catalog(&self) -> Result<Vec<String>, LoadError> {
        Ok((0..10).map(|i| format!("A{i}")).collect())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

#[test]
fn test_concurrent_ensure_loaded_fetches_once() {
    let source = Arc::new(CountingSource::new(false));
    let cache = Arc::new(DatasetCache::new(source.clone()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.ensure_loaded().map(|dataset| dataset.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(100));
    }

    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(cache.state(), CacheState::Ready);
    assert_eq!(cache.stats().load_attempts, 1);
}

#[test]
fn test_concurrent_waiters_share_failure() {
    let source = Arc::new(CountingSource::new(true));
    let cache = Arc::new(DatasetCache::new(source.clone()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.ensure_loaded().map(|dataset| dataset.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            Err(LoadError::unavailable("warehouse unreachable"))
        );
    }

    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert_ne!(cache.state(), CacheState::Ready);

    // A later call retries the load
    assert!(cache.ensure_loaded().is_err());
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_concurrent_matches_are_identical() {
    let engine = EpitopeMatcher::from_source(Arc::new(CountingSource::new(false)));
    let query = AlleleQuery::new(["A1", "A2", "B0"], ["A2"]);
    let expected = engine.match_alleles(&query).unwrap();
    assert!(!expected.is_empty());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let engine = engine.clone();
            let query = query.clone();
            thread::spawn(move || engine.match_alleles(&query).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Panics on the first epitope fetch, then serves one epitope
struct PanicOnceSource {
    fetches: AtomicUsize,
}

impl EpitopeSource for PanicOnceSource {
    fn fetch_epitopes(&self) -> Result<Vec<EpitopeRow>, LoadError> {
        if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("warehouse driver crashed");
        }
        Ok(vec![EpitopeRow {
            id: "E1".to_string(),
            name: "E1".to_string(),
            locus: "A".to_string(),
            alleles: vec!["A1".to_string()],
            required_alleles: vec![],
        }])
    }

    fn fetch_allele_catalog(&self) -> Result<Vec<String>, LoadError> {
        Ok(vec!["A1".to_string()])
    }

    fn describe(&self) -> String {
        "panic-once".to_string()
    }
}

#[test]
fn test_panicking_source_leaves_cache_retryable() {
    let source = Arc::new(PanicOnceSource {
        fetches: AtomicUsize::new(0),
    });
    let cache = Arc::new(DatasetCache::new(source.clone()));

    let err = cache.ensure_loaded().unwrap_err();
    assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("warehouse driver crashed"));
    assert_eq!(cache.state(), CacheState::Uninitialized);

    // Retry from another thread as a fresh request would
    let retry = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || cache.ensure_loaded().map(|dataset| dataset.len()))
    };
    assert_eq!(retry.join().unwrap(), Ok(1));

    assert_eq!(cache.state(), CacheState::Ready);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    assert_eq!(cache.stats().load_failures, 1);
}
