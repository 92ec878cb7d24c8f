//! Hash table with separate chaining.
//!
//! Every bucket is a linked list of entries. An entry caches the hash of its
//! key, so lookups compare hashes before keys and resizing never rehashes a
//! key twice.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::iter::FromIterator;

use crate::error::Error;
use crate::list::List;

pub const DEFAULT_CAPACITY: usize = 3;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Maximum ratio of entries to buckets before the table doubles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadFactor(f64);

impl LoadFactor {
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_nan() || value.is_infinite() || value <= 0.0 {
            return Err(Error::InvalidLoadFactor(value));
        }

        Ok(LoadFactor(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    fn threshold(&self, capacity: usize) -> usize {
        (capacity as f64 * self.0) as usize
    }
}

impl Default for LoadFactor {
    fn default() -> Self {
        LoadFactor(DEFAULT_LOAD_FACTOR)
    }
}

struct Entry<K, V> {
    hash: u64,
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    fn matches<Q>(&self, hash: u64, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.hash == hash && self.key.borrow() == key
    }
}

pub struct HashTable<K, V, S = RandomState> {
    buckets: Vec<List<Entry<K, V>>>,
    len: usize,
    load_factor: LoadFactor,
    threshold: usize,
    hasher: S,
}

impl<K: Hash + Eq, V> HashTable<K, V, RandomState> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Capacities below `DEFAULT_CAPACITY` are raised to it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(capacity, LoadFactor::default(), RandomState::new())
    }

    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Result<Self, Error> {
        Ok(Self::with_config(capacity, LoadFactor::new(load_factor)?, RandomState::new()))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashTable<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_config(DEFAULT_CAPACITY, LoadFactor::default(), hasher)
    }

    pub fn with_config(capacity: usize, load_factor: LoadFactor, hasher: S) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        Self {
            buckets: (0..capacity).map(|_| List::new()).collect(),
            len: 0,
            threshold: load_factor.threshold(capacity),
            load_factor,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> LoadFactor {
        self.load_factor
    }

    /// Drops every entry. The number of buckets is kept.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(List::clear);
        self.len = 0;
    }

    fn hash<Q: Hash + ?Sized>(&self, key: &Q) -> u64 {
        let mut state = self.hasher.build_hasher();
        key.hash(&mut state);
        state.finish()
    }

    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Returns the previous value if `key` was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash(&key);
        let index = self.bucket_index(hash);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|x| x.matches(hash, &key)) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        bucket.push_back(Entry { hash, key, value });
        self.len += 1;
        if self.len > self.threshold {
            self.resize();
        }
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash(key);
        self.buckets[self.bucket_index(hash)]
            .iter()
            .find(|x| x.matches(hash, key))
            .map(|x| &x.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash(key);
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter_mut()
            .find(|x| x.matches(hash, key))
            .map(|x| &mut x.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash(key);
        let index = self.bucket_index(hash);
        let entry = self.buckets[index].remove_by(|x| x.matches(hash, key))?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Doubles the number of buckets and moves every entry by its cached hash.
    fn resize(&mut self) {
        let capacity = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, (0..capacity).map(|_| List::new()).collect());
        self.threshold = self.load_factor.threshold(capacity);

        for entry in old.into_iter().flatten() {
            let index = self.bucket_index(entry.hash);
            self.buckets[index].push_back(entry);
        }
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter().map(|x| (&x.key, &x.value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for HashTable<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(k, v)| {
            self.insert(k, v);
        });
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashTable<K, V, RandomState> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use std::hash::BuildHasherDefault;

    /// Sends every key to the same bucket.
    #[derive(Default)]
    struct Collide;

    impl Hasher for Collide {
        fn finish(&self) -> u64 {
            7
        }

        fn write(&mut self, _: &[u8]) {}
    }

    #[test]
    fn load_factor() {
        assert!(LoadFactor::new(0.5).is_ok());
        assert_eq!(LoadFactor::new(0.0), Err(Error::InvalidLoadFactor(0.0)));
        assert_eq!(LoadFactor::new(-1.0), Err(Error::InvalidLoadFactor(-1.0)));
        assert!(LoadFactor::new(f64::NAN).is_err());
        assert!(LoadFactor::new(f64::INFINITY).is_err());
        assert!(HashTable::<u8, u8>::with_capacity_and_load_factor(8, f64::NAN).is_err());
        assert_eq!(LoadFactor::default().get(), DEFAULT_LOAD_FACTOR);
    }

    #[test]
    fn defaults() {
        let table: HashTable<u8, u8> = HashTable::new();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.load_factor().get(), 0.75);
        assert_eq!(HashTable::<u8, u8>::with_capacity(1).capacity(), DEFAULT_CAPACITY);
        assert_eq!(HashTable::<u8, u8>::with_capacity(10).capacity(), 10);
    }

    #[test]
    fn insert_get() {
        let mut table = HashTable::new();
        assert_eq!(table.insert("one", 1), None);
        assert_eq!(table.insert("two", 2), None);
        assert_eq!(table.get("one"), Some(&1));
        assert_eq!(table.get("three"), None);
        assert_eq!(table.insert("one", 11), Some(1));
        assert_eq!(table.get("one"), Some(&11));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn borrowed_lookup() {
        let mut table = HashTable::new();
        table.insert("key".to_owned(), 1);
        assert!(table.contains_key("key"));
        *table.get_mut("key").unwrap() += 1;
        assert_eq!(table.remove("key"), Some(2));
        assert!(table.is_empty());
    }

    #[test]
    fn remove() {
        let mut table: HashTable<u32, u32> = (0..10).map(|x| (x, x * x)).collect();
        assert_eq!(table.remove(&3), Some(9));
        assert_eq!(table.remove(&3), None);
        assert_eq!(table.get(&3), None);
        assert!(!table.contains_key(&3));
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn resize_keeps_mappings() {
        let mut table = HashTable::new();
        // threshold of 3 buckets at 0.75 is 2
        table.insert(0, "a");
        table.insert(1, "b");
        assert_eq!(table.capacity(), 3);
        table.insert(2, "c");
        assert_eq!(table.capacity(), 6);

        (3..100).for_each(|x| {
            table.insert(x, "z");
        });
        assert_eq!(table.len(), 100);
        tprintln!("{} buckets after 100 inserts", table.capacity());
        assert!(table.capacity() as f64 * 0.75 >= 100.0);
        assert_eq!(table.get(&0), Some(&"a"));
        assert_eq!(table.get(&2), Some(&"c"));
        assert!((3..100).all(|x| table.get(&x) == Some(&"z")));
    }

    #[test]
    fn colliding_keys() {
        let mut table: HashTable<u32, u32, BuildHasherDefault<Collide>> =
            HashTable::with_hasher(BuildHasherDefault::default());
        (0..20).for_each(|x| {
            table.insert(x, x + 100);
        });
        assert_eq!(table.len(), 20);
        assert!((0..20).all(|x| table.get(&x) == Some(&(x + 100))));
        assert_eq!(table.remove(&7), Some(107));
        assert_eq!(table.get(&7), None);
        assert_eq!(table.get(&8), Some(&108));
        // a single non-empty bucket keeps insertion order
        let keys: Vec<u32> = table.keys().copied().collect();
        assert_eq!(keys, (0..20).filter(|&x| x != 7).collect::<Vec<_>>());
    }

    #[test]
    fn keys_values() {
        let table: HashTable<u8, char> = vec![(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
        let mut keys: Vec<u8> = table.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2, 3]);
        let mut values: Vec<char> = table.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec!['a', 'b', 'c']);
        assert_eq!(table.iter().count(), 3);
    }

    #[test]
    fn clear() {
        let mut table: HashTable<u8, u8> = (0..50).map(|x| (x, x)).collect();
        let capacity = table.capacity();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.get(&1), None);
        assert_eq!(table.capacity(), capacity);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn against_std_map() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut table = HashTable::with_capacity_and_load_factor(4, 1.5).unwrap();
        let mut model = HashMap::new();

        for _ in 0..3000 {
            let key: u32 = rng.random_range(0..500);
            match rng.random_range(0..10) {
                0..=5 => assert_eq!(table.insert(key, key ^ 0xff), model.insert(key, key ^ 0xff)),
                6..=7 => assert_eq!(table.remove(&key), model.remove(&key)),
                _ => assert_eq!(table.get(&key), model.get(&key)),
            }
            assert_eq!(table.len(), model.len());
        }

        assert!(model.iter().all(|(k, v)| table.get(k) == Some(v)));
        assert_eq!(table.iter().count(), model.len());
    }
}
