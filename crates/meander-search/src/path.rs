//! The bounded path buffer.

use std::fmt;

use meander_core::{Coord, Grid};

/// Largest share of a grid's cells a single path may occupy. Capping the
/// target length keeps search attempts tractable against the grid size.
pub(crate) const CAPACITY_SHARE: f64 = 0.75;

/// Whether a path of `len` coordinates fits the capacity rule for `grid`.
#[inline]
pub(crate) fn fits_budget(grid: &Grid, len: usize) -> bool {
    len as f64 <= grid.len() as f64 * CAPACITY_SHARE
}

/// An ordered, capacity-fixed sequence of grid coordinates — the path
/// under construction, and eventually the found path.
///
/// The buffer itself does not enforce contiguity; the search engine
/// maintains it by construction and [`Path::is_contiguous`] verifies it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    coords: Vec<Coord>,
    capacity: usize,
}

impl Path {
    /// Create an empty path with room for `capacity` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or exceeds 75% of the grid's cell
    /// count. Both are hard preconditions, not soft warnings.
    pub fn new(capacity: usize, grid: &Grid) -> Self {
        assert!(capacity > 0, "path capacity must be positive");
        assert!(
            fits_budget(grid, capacity),
            "path capacity {capacity} exceeds 75% of the {} grid cells",
            grid.len()
        );
        Self {
            coords: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the path is already at capacity.
    pub fn push(&mut self, c: Coord) {
        assert!(
            self.coords.len() < self.capacity,
            "path already holds its capacity of {} coordinates",
            self.capacity
        );
        self.coords.push(c);
    }

    /// Remove and return the last coordinate, or `None` if the path is
    /// empty. The engine relies on the empty case while backtracking.
    #[inline]
    pub fn pop(&mut self) -> Option<Coord> {
        self.coords.pop()
    }

    /// The last coordinate without removing it, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Whether `c` appears anywhere on the path. Linear scan; the engine
    /// uses its sorted visited set for the hot membership test.
    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// True for paths of length 0 or 1, otherwise true iff every
    /// consecutive pair is exactly one cardinal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.coords.windows(2).all(|w| w[0].manhattan(w[1]) == 1)
    }

    /// Drop all coordinates, retaining capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.coords.clear();
    }

    /// Current number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the path holds no coordinates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The fixed capacity set at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The coordinates in path order.
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterate over the coordinates in path order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "path is empty");
        }
        writeln!(f, "path (length {}):", self.len())?;
        for (i, c) in self.coords.iter().enumerate() {
            writeln!(f, "  [{i}]: {c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10)
    }

    #[test]
    fn push_pop_reverses_order() {
        let g = grid();
        let mut p = Path::new(5, &g);
        let coords = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)];
        for c in coords {
            p.push(c);
        }
        assert_eq!(p.len(), 3);
        for c in coords.iter().rev() {
            assert_eq!(p.pop(), Some(*c));
        }
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn last_peeks_without_removing() {
        let g = grid();
        let mut p = Path::new(3, &g);
        assert_eq!(p.last(), None);
        p.push(Coord::new(4, 4));
        assert_eq!(p.last(), Some(Coord::new(4, 4)));
        assert_eq!(p.len(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn zero_capacity_rejected() {
        let g = grid();
        let _ = Path::new(0, &g);
    }

    #[test]
    #[should_panic(expected = "exceeds 75%")]
    fn over_budget_capacity_rejected() {
        let g = Grid::new(5, 5);
        // 75% of 25 cells is 18.75, so 19 is already over.
        let _ = Path::new(19, &g);
    }

    #[test]
    fn budget_boundary_is_inclusive() {
        let g = Grid::new(5, 5);
        let p = Path::new(18, &g);
        assert_eq!(p.capacity(), 18);
    }

    #[test]
    #[should_panic(expected = "already holds its capacity")]
    fn push_past_capacity_panics() {
        let g = grid();
        let mut p = Path::new(1, &g);
        p.push(Coord::new(0, 0));
        p.push(Coord::new(0, 1));
    }

    #[test]
    fn contiguity_check() {
        let g = grid();
        let mut p = Path::new(6, &g);
        assert!(p.is_contiguous()); // empty
        p.push(Coord::new(2, 2));
        assert!(p.is_contiguous()); // single
        p.push(Coord::new(2, 3));
        p.push(Coord::new(3, 3));
        assert!(p.is_contiguous());
        p.push(Coord::new(5, 5));
        assert!(!p.is_contiguous());
    }

    #[test]
    fn clear_retains_capacity() {
        let g = grid();
        let mut p = Path::new(4, &g);
        p.push(Coord::new(1, 1));
        p.push(Coord::new(1, 2));
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.capacity(), 4);
        // The buffer is reusable after a clear.
        p.push(Coord::new(0, 0));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn contains_scans_whole_path() {
        let g = grid();
        let mut p = Path::new(4, &g);
        p.push(Coord::new(1, 1));
        p.push(Coord::new(1, 2));
        assert!(p.contains(Coord::new(1, 1)));
        assert!(!p.contains(Coord::new(2, 1)));
    }

    #[test]
    fn display_lists_coordinates() {
        let g = grid();
        let mut p = Path::new(3, &g);
        assert_eq!(format!("{p}"), "path is empty");
        p.push(Coord::new(0, 1));
        let shown = format!("{p}");
        assert!(shown.contains("length 1"));
        assert!(shown.contains("(0, 1)"));
    }
}
