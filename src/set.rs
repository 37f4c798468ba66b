//! A hash set with separate chaining over a fixed bucket table.
//!
//! The bucket count is chosen at construction and never changes: no
//! rehashing, no resizing. Colliding elements pile into per-bucket
//! vectors, and membership is always decided by `Eq` within the
//! bucket, never by hash alone.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use thiserror::Error;

/// Rejected construction argument: a set needs at least one bucket.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("capacity must be positive, got {0}")]
pub struct CapacityError(pub usize);

/// A fixed-capacity chained hash set.
pub struct ChainedSet<T> {
    buckets: Vec<Option<Vec<T>>>,
    state: RandomState,
    len: usize,
}

impl<T: Hash + Eq> ChainedSet<T> {
    /// Creates a set with exactly `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError(capacity));
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Ok(ChainedSet {
            buckets,
            state: RandomState::new(),
            len: 0,
        })
    }

    fn bucket_index(&self, elem: &T) -> usize {
        (self.state.hash_one(elem) % self.buckets.len() as u64) as usize
    }

    /// Adds `elem` to the set.
    ///
    /// Returns false without touching the set if an equal element is
    /// already present.
    pub fn insert(&mut self, elem: T) -> bool {
        let index = self.bucket_index(&elem);
        let bucket = self.buckets[index].get_or_insert_with(Vec::new);
        if bucket.contains(&elem) {
            return false;
        }
        bucket.push(elem);
        self.len += 1;
        true
    }

    /// Removes `elem` from the set, if present.
    ///
    /// Returns true exactly when an equal element was removed.
    pub fn remove(&mut self, elem: &T) -> bool {
        let index = self.bucket_index(elem);
        let bucket = match self.buckets[index].as_mut() {
            Some(bucket) => bucket,
            None => return false,
        };
        match bucket.iter().position(|e| e == elem) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Whether the set holds an element equal to `elem`.
    pub fn contains(&self, elem: &T) -> bool {
        let index = self.bucket_index(elem);
        self.buckets[index]
            .as_ref()
            .map(|bucket| bucket.contains(elem))
            .unwrap_or(false)
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed for the lifetime of the set.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
}
