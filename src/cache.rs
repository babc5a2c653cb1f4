//! Short-lived memoization of full fetch results.
//!
//! The cache is an explicit object owned by the session that uses it (the
//! GUI keeps one per window); there is no process-wide state. Entries are
//! keyed by `(lowercased city, day count)` and expire after a fixed TTL,
//! pruned lazily on lookup.

use crate::models::{HourlyRecord, Location};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default time-to-live for cached results.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct CacheEntry {
    location: Location,
    records: Vec<HourlyRecord>,
    inserted: Instant,
}

/// TTL-bounded map from `(city, days)` to a fetched result.
pub struct ForecastCache {
    ttl: Duration,
    entries: HashMap<(String, u8), CacheEntry>,
}

impl ForecastCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh result for this key, if any. Expired entries (this key or
    /// others) are dropped before the lookup.
    pub fn get(&mut self, city: &str, days: u8) -> Option<(Location, Vec<HourlyRecord>)> {
        let ttl = self.ttl;
        self.entries.retain(|_, e| e.inserted.elapsed() < ttl);
        self.entries
            .get(&Self::key(city, days))
            .map(|e| (e.location.clone(), e.records.clone()))
    }

    pub fn insert(&mut self, city: &str, days: u8, location: Location, records: Vec<HourlyRecord>) {
        self.entries.insert(
            Self::key(city, days),
            CacheEntry {
                location,
                records,
                inserted: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(city: &str, days: u8) -> (String, u8) {
        (city.trim().to_lowercase(), days)
    }
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
