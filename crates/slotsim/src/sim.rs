//! Simulator state container: slot map plus access cache
//!
//! Semantics mirror warm/cold storage access in blockchain virtual
//! machines: a slot read is cold the first time and warm afterwards.
//! Warmness is decided solely by prior loads; stores never warm a slot.

use std::collections::HashMap;
use ahash::RandomState;

/// Default value for slots that were never stored
pub const DEFAULT_VALUE: i64 = 0;

/// Result of a single `load` operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Was the slot already in the access cache before this load?
    pub warm: bool,
    /// Stored value, or [`DEFAULT_VALUE`] for a slot never written
    pub value: i64,
}

/// In-memory storage simulator
///
/// Owns two structures:
/// - `slots`: key -> value map, mutated only by [`store`](Self::store)
/// - `warm_keys`: access cache in first-read order, no duplicates,
///   appended to only by [`load`](Self::load)
///
/// Instances are explicitly constructed and owned by the caller (a
/// request handler or a test); there is no global singleton.
#[derive(Debug, Default)]
pub struct StorageSim {
    slots: HashMap<i64, i64, RandomState>,
    warm_keys: Vec<i64>,
}

impl StorageSim {
    /// Create an empty simulator
    pub fn new() -> Self {
        Self {
            slots: HashMap::with_hasher(RandomState::new()),
            warm_keys: Vec::new(),
        }
    }

    /// Upsert `key -> value` into the slot map
    ///
    /// Does not touch the access cache: writing a slot never warms it.
    pub fn store(&mut self, key: i64, value: i64) {
        self.slots.insert(key, value);
    }

    /// Read a slot, warming it as a side effect
    ///
    /// Warmness is checked before the cache is mutated, so the first load
    /// of a key reports cold and every later load reports warm. Reading a
    /// key that was never stored returns [`DEFAULT_VALUE`] without
    /// inserting anything into the slot map.
    pub fn load(&mut self, key: i64) -> LoadOutcome {
        let warm = self.is_warm(key);
        if !warm {
            self.warm_keys.push(key);
        }
        LoadOutcome {
            warm,
            value: self.value(key),
        }
    }

    /// Reset slot map and access cache to the empty initial state
    pub fn clear(&mut self) {
        self.slots.clear();
        self.warm_keys.clear();
    }

    /// Is the key in the access cache?
    pub fn is_warm(&self, key: i64) -> bool {
        self.warm_keys.contains(&key)
    }

    /// Current value of a slot, [`DEFAULT_VALUE`] if never stored
    pub fn value(&self, key: i64) -> i64 {
        self.slots.get(&key).copied().unwrap_or(DEFAULT_VALUE)
    }

    /// Stored slots as `(key, value)` pairs, ascending by key
    ///
    /// The map itself is unordered; sorting here keeps derived views
    /// deterministic across runs.
    pub fn slots(&self) -> Vec<(i64, i64)> {
        let mut entries: Vec<_> = self.slots.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Access cache contents in first-read order
    pub fn warm_keys(&self) -> &[i64] {
        &self.warm_keys
    }

    /// Number of stored slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Is the slot map empty?
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of keys in the access cache
    pub fn cache_len(&self) -> usize {
        self.warm_keys.len()
    }
}
