//! Active-region tracking for camera framing.
//!
//! Keeps the set of currently enabled objects together with the union of
//! their bounds. Enabling an object grows the cached region in place;
//! disabling one rebuilds the region from the remaining members, since a
//! union cannot be shrunk by subtraction.

use std::collections::HashMap;
use std::hash::Hash;

use crate::bounds::Aabb;

/// Tracks which objects are enabled and the region they cover.
///
/// Both notifications are idempotent: a duplicate enable or a disable of an
/// unknown object changes nothing and reports no region change.
#[derive(Debug, Clone)]
pub struct ActiveRegionTracker<K> {
    /// Enabled objects and the bounds they were enabled with
    members: HashMap<K, Aabb>,

    /// Union of all member bounds, `None` while the set is empty
    region: Option<Aabb>,
}

impl<K: Copy + Eq + Hash> ActiveRegionTracker<K> {
    /// Create a new empty tracker.
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            region: None,
        }
    }

    /// Register an enabled object.
    /// Returns true if the region changed (the object was not already tracked).
    pub fn on_object_enabled(&mut self, id: K, bounds: Aabb) -> bool {
        if self.members.contains_key(&id) {
            return false;
        }

        let bounds = Aabb::new(bounds.center, bounds.extents);
        self.members.insert(id, bounds);

        match self.region.as_mut() {
            Some(region) => region.encapsulate(&bounds),
            None => self.region = Some(bounds),
        }

        true
    }

    /// Unregister a disabled object and rebuild the region from scratch.
    /// Returns true if the object was tracked, even when the rebuilt region
    /// comes out identical.
    pub fn on_object_disabled(&mut self, id: K) -> bool {
        if self.members.remove(&id).is_none() {
            return false;
        }

        self.region = Aabb::union_all(self.members.values());
        true
    }

    /// Union of all enabled objects' bounds.
    #[inline]
    pub fn current_region(&self) -> Option<Aabb> {
        self.region
    }

    #[inline]
    pub fn contains(&self, id: K) -> bool {
        self.members.contains_key(&id)
    }

    /// Iterate the enabled objects (order unspecified).
    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.members.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Forget every object (board reset).
    pub fn clear(&mut self) {
        self.members.clear();
        self.region = None;
    }
}

impl<K: Copy + Eq + Hash> Default for ActiveRegionTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
