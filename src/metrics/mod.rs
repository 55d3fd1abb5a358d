//! Basic metrics instrumentation.
//!
//! Counters and duration tracking for served HTTP requests. The collector is
//! cheap to clone and shared through application state; the request-tracking
//! middleware feeds it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for the request pipeline.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of requests served
    requests_total: Arc<AtomicU64>,

    /// Total number of requests that ended in a 4xx or 5xx
    errors_total: Arc<AtomicU64>,

    /// Total handling duration of all requests in milliseconds
    duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            errors_total: Arc::new(AtomicU64::new(0)),
            duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a served request with its handling duration.
    pub fn record_request(&self, duration: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a request that ended in an error status.
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total requests served.
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Get total error responses.
    pub fn errors_total(&self) -> u64 {
        self.errors_total.load(Ordering::Relaxed)
    }

    /// Get total handling duration in milliseconds.
    pub fn duration_total_ms(&self) -> u64 {
        self.duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average handling duration in milliseconds.
    pub fn duration_avg_ms(&self) -> f64 {
        let total = self.duration_total_ms.load(Ordering::Relaxed);
        let count = self.requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests_total: self.requests_total(),
            errors_total: self.errors_total(),
            duration_total_ms: self.duration_total_ms(),
            duration_avg_ms: self.duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub errors_total: u64,
    pub duration_total_ms: u64,
    pub duration_avg_ms: f64,
}
