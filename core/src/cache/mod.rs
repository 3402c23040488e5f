//! Fixed-capacity key/value store with least-recently-used eviction.
//!
//! Recency is tracked with a monotonically increasing tick per entry and a
//! tick-ordered index, so the recency order is total and ties cannot occur.
//! The oldest tick is always the eviction candidate.
//!
//! The cache is not internally synchronized. It assumes a single writer;
//! sharing one instance across threads requires external locking.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

struct Slot<V> {
    value: V,
    tick: u64,
}

pub struct BoundedRecencyCache<K, V> {
    capacity: usize,
    entries: HashMap<K, Slot<V>>,
    /// tick -> key, oldest first.
    recency: BTreeMap<u64, K>,
    next_tick: u64,
}

impl<K, V> BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// A capacity of zero is valid: such a cache never retains an entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            next_tick: 0,
        }
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = self.entries.get_mut(key)?;
        let tick = self.next_tick;
        self.next_tick += 1;
        let old = std::mem::replace(&mut slot.tick, tick);
        if let Some(k) = self.recency.remove(&old) {
            self.recency.insert(tick, k);
        }
        Some(&slot.value)
    }

    /// Inserts or replaces `key`, evicting the least recently used entry when full.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        let tick = self.bump();
        if let Some(slot) = self.entries.get_mut(&key) {
            let old = std::mem::replace(&mut slot.tick, tick);
            slot.value = value;
            self.recency.remove(&old);
            self.recency.insert(tick, key);
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        self.recency.insert(tick, key.clone());
        self.entries.insert(key, Slot { value, tick });
    }

    /// Does not affect recency.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Values from least to most recently used.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.recency
            .values()
            .filter_map(|key| self.entries.get(key).map(|slot| &slot.value))
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.recency.values()
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn bump(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
        }
    }
}

impl<K, V> std::fmt::Debug for BoundedRecencyCache<K, V>
where
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedRecencyCache")
            .field("capacity", &self.capacity)
            .field("keys", &self.recency.values().collect::<Vec<_>>())
            .finish()
    }
}
