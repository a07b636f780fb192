//! Access statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for simulator activity
///
/// Shared read-only across connections, so counters are atomics.
#[derive(Debug, Default)]
pub struct AccessStats {
    cold_loads: AtomicU64,
    warm_loads: AtomicU64,
    stores: AtomicU64,
    clears: AtomicU64,
}

impl AccessStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cold (first-time) load
    pub fn record_cold(&self) {
        self.cold_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a warm load
    pub fn record_warm(&self) {
        self.warm_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a store
    pub fn record_store(&self) {
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a clear
    pub fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    /// Total cold loads
    pub fn cold_loads(&self) -> u64 {
        self.cold_loads.load(Ordering::Relaxed)
    }

    /// Total warm loads
    pub fn warm_loads(&self) -> u64 {
        self.warm_loads.load(Ordering::Relaxed)
    }

    /// Total stores
    pub fn stores(&self) -> u64 {
        self.stores.load(Ordering::Relaxed)
    }

    /// Total clears
    pub fn clears(&self) -> u64 {
        self.clears.load(Ordering::Relaxed)
    }

    /// Fraction of loads that were warm (0.0 to 1.0)
    pub fn warm_ratio(&self) -> f64 {
        let warm = self.warm_loads();
        let total = warm + self.cold_loads();
        if total == 0 {
            0.0
        } else {
            warm as f64 / total as f64
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.cold_loads.store(0, Ordering::Relaxed);
        self.warm_loads.store(0, Ordering::Relaxed);
        self.stores.store(0, Ordering::Relaxed);
        self.clears.store(0, Ordering::Relaxed);
    }
}
