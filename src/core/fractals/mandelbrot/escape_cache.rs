use std::collections::{BTreeMap, HashMap};

use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;

pub const DEFAULT_CACHE_CAPACITY: usize = 65_536;

/// How many escape results the cache may hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CachePolicy {
    /// Never evict. Fine for panning over a small set of revisited points.
    Unbounded,
    /// Evict the least recently used entry once `capacity` is reached.
    /// A capacity of zero disables caching.
    Bounded(usize),
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::Bounded(DEFAULT_CACHE_CAPACITY)
    }
}

impl CachePolicy {
    /// Zero means unbounded, matching the configuration file.
    #[must_use]
    pub fn from_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            Self::Unbounded
        } else {
            Self::Bounded(capacity)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
}

#[derive(Debug, Copy, Clone)]
struct Entry {
    result: EscapeResult,
    last_used: u64,
}

/// Memo table for escape results keyed by point value.
///
/// Recency is a monotonically increasing tick; `recency` maps each live tick
/// back to its point so the oldest entry is always the first key.
#[derive(Debug)]
pub struct EscapeCache {
    policy: CachePolicy,
    entries: HashMap<Point, Entry>,
    recency: BTreeMap<u64, Point>,
    tick: u64,
    hits: u64,
    misses: u64,
}

impl Default for EscapeCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl EscapeCache {
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn get(&mut self, point: &Point) -> Option<EscapeResult> {
        let tick = self.next_tick();

        match self.entries.get_mut(point) {
            Some(entry) => {
                self.recency.remove(&entry.last_used);
                self.recency.insert(tick, *point);
                entry.last_used = tick;
                self.hits += 1;
                Some(entry.result)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, point: Point, result: EscapeResult) {
        if self.policy == CachePolicy::Bounded(0) {
            return;
        }

        let tick = self.next_tick();

        if let Some(entry) = self.entries.get_mut(&point) {
            self.recency.remove(&entry.last_used);
            self.recency.insert(tick, point);
            entry.result = result;
            entry.last_used = tick;
            return;
        }

        if let CachePolicy::Bounded(capacity) = self.policy {
            while self.entries.len() >= capacity {
                match self.recency.pop_first() {
                    Some((_, oldest)) => {
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }

        self.recency.insert(tick, point);
        self.entries.insert(
            point,
            Entry {
                result,
                last_used: tick,
            },
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            len: self.entries.len(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(re: f64) -> Point {
        Point::new(re, 0.0, 80).unwrap()
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = EscapeCache::new(CachePolicy::Unbounded);

        assert_eq!(cache.get(&point(0.5)), None);
        cache.insert(point(0.5), EscapeResult::escaped(5));

        assert_eq!(cache.get(&point(0.5)), Some(EscapeResult::escaped(5)));
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_bounded_cache_evicts_least_recently_used() {
        let mut cache = EscapeCache::new(CachePolicy::Bounded(2));

        cache.insert(point(1.0), EscapeResult::escaped(1));
        cache.insert(point(2.0), EscapeResult::escaped(2));
        // touching 1.0 makes 2.0 the oldest
        assert!(cache.get(&point(1.0)).is_some());
        cache.insert(point(3.0), EscapeResult::escaped(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&point(1.0)).is_some());
        assert!(cache.get(&point(2.0)).is_none());
        assert!(cache.get(&point(3.0)).is_some());
    }

    #[test]
    fn test_bounded_cache_never_exceeds_capacity() {
        let mut cache = EscapeCache::new(CachePolicy::Bounded(16));

        for i in 0..1000 {
            cache.insert(point(i as f64 * 0.001), EscapeResult::stable());
            assert!(cache.len() <= 16);
        }

        assert_eq!(cache.len(), 16);
    }

    #[test]
    fn test_reinserting_existing_point_does_not_evict() {
        let mut cache = EscapeCache::new(CachePolicy::Bounded(2));

        cache.insert(point(1.0), EscapeResult::escaped(1));
        cache.insert(point(2.0), EscapeResult::escaped(2));
        cache.insert(point(1.0), EscapeResult::escaped(1));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&point(2.0)).is_some());
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let mut cache = EscapeCache::new(CachePolicy::Bounded(0));

        cache.insert(point(1.0), EscapeResult::escaped(1));

        assert!(cache.is_empty());
        assert_eq!(cache.get(&point(1.0)), None);
    }

    #[test]
    fn test_unbounded_cache_keeps_everything() {
        let mut cache = EscapeCache::new(CachePolicy::Unbounded);

        for i in 0..500 {
            cache.insert(point(i as f64), EscapeResult::stable());
        }

        assert_eq!(cache.len(), 500);
    }

    #[test]
    fn test_clear_keeps_counters() {
        let mut cache = EscapeCache::default();
        cache.insert(point(1.0), EscapeResult::stable());
        let _ = cache.get(&point(1.0));

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_policy_from_capacity() {
        assert_eq!(CachePolicy::from_capacity(0), CachePolicy::Unbounded);
        assert_eq!(CachePolicy::from_capacity(10), CachePolicy::Bounded(10));
    }
}
