//! Geometry cache: content-addressed memoization of rasterized lines.
//!
//! Entries are keyed by [`GeometryKey`] and never change once stored. Every
//! read hands out a fresh copy and every write stores one, so the buffers the
//! adapter appends to are never aliased with cached data.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::rasterizer::rasterize;
use crate::error::{RasterError, RasterResult};
use crate::geometry::{GeometryKey, Line, Point};

static GLOBAL: Lazy<GeometryCache> = Lazy::new(GeometryCache::default);

/// What `put` does when a key is stored again with a different payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Reject the write with [`RasterError::InconsistentCacheEntry`].
    #[default]
    Strict,
    /// Replace the stored entry and log a warning.
    Lenient,
}

/// Counters reported by [`GeometryCache::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Default)]
struct Entries {
    map: HashMap<GeometryKey, Arc<[Point]>>,
    hits: u64,
    misses: u64,
}

/// A thread-safe map from line geometry to its rasterized points.
///
/// A single lock guards lookup and insert together; [`get_or_rasterize`]
/// keeps it held while a missing line is rasterized, so each key is computed
/// at most once no matter how many threads ask for it.
///
/// There is no eviction: entries live as long as the cache.
///
/// [`get_or_rasterize`]: GeometryCache::get_or_rasterize
#[derive(Default)]
pub struct GeometryCache {
    policy: CachePolicy,
    entries: Mutex<Entries>,
}

impl GeometryCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: Mutex::new(Entries::default()),
        }
    }

    /// The process-wide cache, created on first use with the strict policy.
    pub fn global() -> &'static GeometryCache {
        &GLOBAL
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Look up `key`, returning an independent copy of the cached points.
    pub fn get(&self, key: &GeometryKey) -> Option<Vec<Point>> {
        let mut entries = self.entries.lock();
        match entries.map.get(key).map(|pts| pts.to_vec()) {
            Some(points) => {
                entries.hits += 1;
                Some(points)
            }
            None => {
                entries.misses += 1;
                None
            }
        }
    }

    /// Store a copy of `points` under `key`.
    ///
    /// Storing an equal payload again is a no-op. Storing a different payload
    /// fails under [`CachePolicy::Strict`] and overwrites under
    /// [`CachePolicy::Lenient`].
    pub fn put(&self, key: GeometryKey, points: &[Point]) -> RasterResult<()> {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.map.get(&key) {
            if **existing == *points {
                return Ok(());
            }
            match self.policy {
                CachePolicy::Strict => return Err(RasterError::InconsistentCacheEntry { key }),
                CachePolicy::Lenient => {
                    warn!("overwriting inconsistent cache entry {}", key);
                }
            }
        }
        entries.map.insert(key, Arc::from(points));
        Ok(())
    }

    /// Return the cached points for `key`, computing and storing them with
    /// `compute` on a miss. The lock is held throughout.
    ///
    /// A failing `compute` leaves the cache untouched.
    pub fn get_or_insert_with<F>(&self, key: GeometryKey, compute: F) -> RasterResult<Vec<Point>>
    where
        F: FnOnce() -> RasterResult<Vec<Point>>,
    {
        let mut entries = self.entries.lock();
        if let Some(cached) = entries.map.get(&key).map(|pts| pts.to_vec()) {
            entries.hits += 1;
            debug!("cache hit for {}", key);
            return Ok(cached);
        }
        entries.misses += 1;
        let points = compute()?;
        debug!("cache miss for {}: stored {} points", key, points.len());
        entries.map.insert(key, Arc::from(points.as_slice()));
        Ok(points)
    }

    /// Rasterize `line` through the cache.
    pub fn get_or_rasterize(&self, line: &Line) -> RasterResult<Vec<Point>> {
        self.get_or_insert_with(line.key(), || rasterize(line))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().map.is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        info!("clearing geometry cache ({} entries)", entries.map.len());
        *entries = Entries::default();
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        CacheStats {
            hits: entries.hits,
            misses: entries.misses,
            entries: entries.map.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_raster_cache.rs"]
mod tests;
