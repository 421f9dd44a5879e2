//! HashTable: string keys, separate chaining, caller-driven resizing.
//!
//! Entries live in a generational arena; each bucket holds the arena key of
//! its chain head and each entry holds the key of its successor. Unlinking
//! an entry is therefore a single link rewrite once it has been located.

use crate::hashing::{Djb2, KeyHash};
use core::fmt;
use log::{debug, warn};
use slotmap::{DefaultKey, SlotMap};

/// Smallest number of buckets a table will ever have.
pub const MIN_CAPACITY: usize = 8;

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    hash: u64,
    next: Option<DefaultKey>,
}

impl<V> Entry<V> {
    #[inline]
    fn matches(&self, hash: u64, key: &str) -> bool {
        self.hash == hash && self.key == key
    }
}

pub struct HashTable<V, H = Djb2> {
    hasher: H,
    buckets: Vec<Option<DefaultKey>>, // chain heads, len == capacity
    entries: SlotMap<DefaultKey, Entry<V>>,
}

impl<V> HashTable<V> {
    /// Creates a DJB2-hashed table with `capacity` buckets, raised to
    /// `MIN_CAPACITY` if smaller.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Djb2)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new(MIN_CAPACITY)
    }
}

/// Iterator over immutable entries in `HashTable`.
pub struct Iter<'a, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, e)| (e.key.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// Iterator over mutable entries in `HashTable`.
pub struct IterMut<'a, V> {
    it: slotmap::basic::IterMut<'a, DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|(_, e)| (e.key.as_str(), &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V, H> HashTable<V, H>
where
    H: KeyHash,
{
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            hasher,
            buckets: vec![None; capacity.max(MIN_CAPACITY)],
            entries: SlotMap::with_key(),
        }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Number of buckets.
    pub fn num_slots(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `len / num_slots`. Nothing in the table acts on this; callers use it
    /// to decide when to `resize`.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.num_slots() as f64
    }

    /// Bucket that `key` belongs to under the current capacity.
    pub fn bucket_index(&self, key: &str) -> usize {
        self.index_for(self.hasher.hash_key(key))
    }

    #[inline]
    fn index_for(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    fn find_slot(&self, hash: u64, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[self.index_for(hash)];
        while let Some(k) = cur {
            let e = &self.entries[k];
            if e.matches(hash, key) {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    /// Pushes an arena entry onto the head of the chain its stored hash
    /// selects. Shared by `put` and `resize`.
    fn link_at_head(&mut self, k: DefaultKey) {
        let idx = self.index_for(self.entries[k].hash);
        self.entries[k].next = self.buckets[idx].replace(k);
    }

    /// Stores `value` under `key`. An existing entry is overwritten in place;
    /// otherwise a new entry becomes the head of its bucket's chain. Never
    /// resizes.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let hash = self.hasher.hash_key(&key);
        if let Some(k) = self.find_slot(hash, &key) {
            self.entries[k].value = value;
            return;
        }
        let k = self.entries.insert(Entry {
            key,
            value,
            hash,
            next: None,
        });
        self.link_at_head(k);
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let hash = self.hasher.hash_key(key);
        self.find_slot(hash, key).map(|k| &self.entries[k].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let hash = self.hasher.hash_key(key);
        let k = self.find_slot(hash, key)?;
        Some(&mut self.entries[k].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let hash = self.hasher.hash_key(key);
        self.find_slot(hash, key).is_some()
    }

    /// Unlinks the entry for `key` and returns its key and value. A miss
    /// (including an empty bucket) logs a warning and leaves the table as is.
    pub fn delete(&mut self, key: &str) -> Option<(String, V)> {
        let hash = self.hasher.hash_key(key);
        let idx = self.index_for(hash);

        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let e = &self.entries[k];
            if e.matches(hash, key) {
                let next = e.next;
                match prev {
                    None => self.buckets[idx] = next,
                    Some(p) => self.entries[p].next = next,
                }
                return self.entries.remove(k).map(|e| (e.key, e.value));
            }
            prev = cur;
            cur = e.next;
        }

        warn!("delete: key {key:?} not found");
        None
    }

    /// Rebuilds the bucket array with `new_capacity` slots (clamped to
    /// `MIN_CAPACITY`) and relinks every entry into its new bucket.
    ///
    /// Entries are pushed head-first in old-bucket order, so the order
    /// within a chain afterwards is unrelated to the order before.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(MIN_CAPACITY);
        let old_capacity = self.buckets.len();
        let old = core::mem::replace(&mut self.buckets, vec![None; new_capacity]);

        for head in old {
            let mut cur = head;
            while let Some(k) = cur {
                cur = self.entries[k].next;
                self.link_at_head(k);
            }
        }

        debug!(
            "resize: {old_capacity} -> {new_capacity} slots, {} entries",
            self.len()
        );
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.fill(None);
    }

    /// Number of entries chained in bucket `bucket`. Panics if
    /// `bucket >= num_slots()`.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// Chain length of every bucket, in bucket order.
    pub fn chain_lengths(&self) -> Vec<usize> {
        (0..self.buckets.len()).map(|b| self.chain_len(b)).collect()
    }

    fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            entries: &self.entries,
            cur: self.buckets[bucket],
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.entries.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.entries.iter_mut(),
        }
    }

    /// Display view of every bucket and its chain, head first.
    pub fn buckets(&self) -> Buckets<'_, V, H> {
        Buckets { table: self }
    }
}

/// Walks one bucket's chain from its head.
struct Chain<'a, V> {
    entries: &'a SlotMap<DefaultKey, Entry<V>>,
    cur: Option<DefaultKey>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = &'a Entry<V>;
    fn next(&mut self) -> Option<Self::Item> {
        let entries: &'a SlotMap<DefaultKey, Entry<V>> = self.entries;
        let e = &entries[self.cur?];
        self.cur = e.next;
        Some(e)
    }
}

/// Renders one line per bucket: `[i] (k: v)-->(k: v)` or `[i] [Empty List]`.
pub struct Buckets<'a, V, H> {
    table: &'a HashTable<V, H>,
}

impl<'a, V, H> fmt::Display for Buckets<'a, V, H>
where
    V: fmt::Debug,
    H: KeyHash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in 0..self.table.num_slots() {
            write!(f, "[{b}] ")?;
            let mut chain = self.table.chain(b).peekable();
            if chain.peek().is_none() {
                f.write_str("[Empty List]")?;
            }
            while let Some(e) = chain.next() {
                write!(f, "({:?}: {:?})", e.key, e.value)?;
                if chain.peek().is_some() {
                    f.write_str("-->")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V, H> fmt::Debug for HashTable<V, H>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.values().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

impl<'a, V, H> IntoIterator for &'a HashTable<V, H>
where
    H: KeyHash,
{
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
