use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use hashbrown::HashMap;

/// Counters reported by every cache built on [`LruStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups served without building, `0.0` before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries={}/{} hits={} misses={} evictions={} hit_ratio={:.2}",
            self.entries,
            self.capacity,
            self.hits,
            self.misses,
            self.evictions,
            self.hit_ratio()
        )
    }
}

/// A stored value with the logical time it was last touched.
#[derive(Clone, Debug)]
pub struct Timestamped<V> {
    pub value: V,
    pub last_access: u64,
}

/// Bounded map that builds missing values on demand and evicts the least
/// recently accessed entry when full.
///
/// Access times come from a private counter bumped on every lookup, so no two
/// accesses share a timestamp.
pub struct LruStore<K, V> {
    entries: HashMap<K, Timestamped<V>>,
    capacity: NonZeroUsize,
    clock: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<K, V> LruStore<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.get()),
            capacity,
            clock: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    #[inline]
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Returns the value for `key`, building it with `build` on a miss.
    ///
    /// A miss on a full store evicts the oldest entry before `build` runs.
    /// Hits and misses both refresh the entry's access time.
    pub fn get_or_insert_with<F>(&mut self, key: K, build: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let now = self.tick();
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity.get() {
                self.evict_oldest();
            }
        }
        let slot = self.entries.entry(key).or_insert_with(|| Timestamped {
            value: build(),
            last_access: now,
        });
        slot.last_access = now;
        &slot.value
    }

    /// Lookup that counts as an access; `None` on a miss without building.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.tick();
        match self.entries.get_mut(key) {
            Some(slot) => {
                self.hits += 1;
                slot.last_access = now;
                Some(&slot.value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Lookup that leaves access times and counters alone.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|slot| &slot.value)
    }

    pub fn last_access(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|slot| slot.last_access)
    }

    /// Removes the entry with the smallest access time. The first entry the
    /// scan meets wins a tie.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        let mut oldest: Option<(&K, u64)> = None;
        for (k, slot) in self.entries.iter() {
            match oldest {
                Some((_, t)) if t <= slot.last_access => {}
                _ => oldest = Some((k, slot.last_access)),
            }
        }
        let key = oldest.map(|(k, _)| k.clone())?;
        let slot = self.entries.remove(&key)?;
        self.evictions += 1;
        log::debug!("evicted {:?} last_access={}", key, slot.last_access);
        Some((key, slot.value))
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            entries: self.entries.len(),
            capacity: self.capacity.get(),
        }
    }
}
