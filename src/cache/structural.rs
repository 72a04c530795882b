use std::{collections::HashMap, sync::Arc};

use crate::document::object::Dict;

/// Objects that can be deduplicated by value.
///
/// `structural_key` must be equal for any two structurally equal values; it only needs to be
/// cheap, not collision free.
pub trait StructuralObject {
    /// Cheap digest; equal for structurally equal values.
    fn structural_key(&self) -> u64;
    /// Deep structural comparison.
    fn structurally_eq(&self, other: &Self) -> bool;
}

impl StructuralObject for Dict {
    fn structural_key(&self) -> u64 {
        self.shallow_digest()
    }

    fn structurally_eq(&self, other: &Self) -> bool {
        Dict::structurally_eq(self, other)
    }
}

#[derive(Debug)]
/// Deduplicating cache for emitted objects.
///
/// Scoped to one document translation session; not meant to be shared between threads
/// translating the same document.
pub struct ObjectCache<T> {
    buckets: HashMap<u64, Vec<Arc<T>>>,
    hits: u64,
}

impl<T> Default for ObjectCache<T> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
            hits: 0,
        }
    }
}

impl<T: StructuralObject> ObjectCache<T> {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a previously registered object equal to `candidate`, or register and return
    /// `candidate` itself.
    pub fn make_unique(&mut self, candidate: Arc<T>) -> Arc<T> {
        let bucket = self.buckets.entry(candidate.structural_key()).or_default();
        if let Some(existing) = bucket
            .iter()
            .find(|s| Arc::ptr_eq(s, &candidate) || s.structurally_eq(&candidate))
        {
            self.hits += 1;
            tracing::debug!(hits = self.hits, "reusing cached object");
            return Arc::clone(existing);
        }
        bucket.push(Arc::clone(&candidate));
        candidate
    }

    /// Number of distinct objects registered.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// `true` when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of lookups answered with an already registered object.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Forget every registered object and reset the hit count.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.hits = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/structural.rs"]
mod tests;
