//! A capacity-fixed sorted set of grid coordinates.

use meander_core::{Coord, Grid};

/// A sorted-array coordinate set with capacity fixed at construction.
///
/// Membership is a binary search over [`Coord`]'s row-then-column
/// ordering; insert and remove shift the tail to keep the array sorted
/// and duplicate-free. The search engine uses one instance as the shared
/// "used starting points" registry and one per attempt as the visited
/// set, clearing rather than reallocating between attempts.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Coord>,
    capacity: usize,
}

impl PointSet {
    /// Create an empty set with room for `capacity` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "point set capacity must be positive");
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a set sized to hold every cell of `grid`. A set of this
    /// capacity can never overflow with in-bounds coordinates.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::with_capacity(grid.len())
    }

    /// Insert `p`, keeping the array sorted. Returns `true` if the set
    /// changed, `false` if `p` was already a member.
    ///
    /// # Panics
    ///
    /// Panics if the set is full and `p` is not already a member; with the
    /// capacity sized to the grid this indicates coordinates from outside
    /// the grid, a caller error.
    pub fn insert(&mut self, p: Coord) -> bool {
        match self.points.binary_search(&p) {
            Ok(_) => false,
            Err(idx) => {
                assert!(
                    self.points.len() < self.capacity,
                    "point set already holds its capacity of {} coordinates",
                    self.capacity
                );
                self.points.insert(idx, p);
                true
            }
        }
    }

    /// Remove `p` if present, closing the gap. Returns `true` if the set
    /// changed, `false` if `p` was absent.
    pub fn remove(&mut self, p: Coord) -> bool {
        match self.points.binary_search(&p) {
            Ok(idx) => {
                self.points.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether `p` is a member.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.points.binary_search(&p).is_ok()
    }

    /// Drop all members, retaining the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Current number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The fixed capacity set at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The members in sorted order.
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.points
    }
}
