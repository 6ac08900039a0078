//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Searches (outcomes, catalog latency)
//! - Favorites (toggle outcomes)
//! - Storage (read/write failures, dropped records)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Search Metrics
// =============================================================================

/// Searches total by outcome.
pub static SEARCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("showstore_searches_total", "Total search submissions"),
        &["outcome"], // "populated", "empty", "failed", "stale", "rejected"
    )
    .unwrap()
});

/// Time from search submission to completion, in seconds.
pub static SEARCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "showstore_search_duration_seconds",
            "Duration of catalog searches",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["outcome"],
    )
    .unwrap()
});

/// Shows returned per accepted search.
pub static SEARCH_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new("showstore_search_results", "Shows returned per search")
            .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0]),
    )
    .unwrap()
});

// =============================================================================
// Favorites Metrics
// =============================================================================

/// Favorite toggles by outcome.
pub static TOGGLES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("showstore_toggles_total", "Total favorite toggles"),
        &["outcome"], // "added", "removed", "unresolved"
    )
    .unwrap()
});

// =============================================================================
// Storage Metrics
// =============================================================================

/// Storage failures by operation.
pub static STORAGE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "showstore_storage_failures_total",
            "Favorites storage failures",
        ),
        &["operation"], // "read", "write"
    )
    .unwrap()
});

/// Stored favorite records dropped because they could not be decoded.
pub static MALFORMED_FAVORITE_ENTRIES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "showstore_malformed_favorite_entries_total",
        "Stored favorite entries dropped on load",
    )
    .unwrap()
});

/// All core metrics, for registration by the embedding binary.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Search
        Box::new(SEARCHES_TOTAL.clone()),
        Box::new(SEARCH_DURATION.clone()),
        Box::new(SEARCH_RESULTS.clone()),
        // Favorites
        Box::new(TOGGLES_TOTAL.clone()),
        // Storage
        Box::new(STORAGE_FAILURES.clone()),
        Box::new(MALFORMED_FAVORITE_ENTRIES.clone()),
    ]
}
