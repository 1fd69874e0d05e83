use std::collections::{
    HashMap,
    HashSet,
};

/// Hash map backed by [`ahash`], used for catalog and configuration tables.
pub type FastHashMap<K, V> = HashMap<K, V, ahash::RandomState>;
/// Hash set backed by [`ahash`], used for flag sets.
pub type FastHashSet<V> = HashSet<V, ahash::RandomState>;
