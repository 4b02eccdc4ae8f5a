//! Geometry primitives: [`Coord`].

use std::fmt;

/// A 2D grid coordinate. Row grows down, column grows right.
///
/// Coordinates are 16-bit by design: the grid never exceeds 65535 rows or
/// columns, which caps worst-case memory for the dense cell array.
///
/// The derived [`Ord`] compares by row first, then column. The sorted point
/// set in `meander-search` relies on exactly this ordering for its binary
/// searches, so the field order here is load-bearing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    /// Steps to the four cardinal neighbors, in east, west, south, north
    /// order. The search engine iterates directions in this fixed order,
    /// which decides tie-breaking among equally valid continuations.
    pub const CARDINALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Return the coordinate shifted by `(dr, dc)`, or `None` if the result
    /// would leave the 16-bit coordinate range in either direction.
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Self> {
        let row = i32::from(self.row) + dr;
        let col = i32::from(self.col) + dc;
        if row < 0 || row > i32::from(u16::MAX) || col < 0 || col > i32::from(u16::MAX) {
            return None;
        }
        Some(Self {
            row: row as u16,
            col: col as u16,
        })
    }

    /// Manhattan distance to `other`. Two coordinates are cardinal
    /// neighbors exactly when this is 1.
    #[inline]
    pub fn manhattan(self, other: Self) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let a = Coord::new(0, 9);
        let b = Coord::new(1, 0);
        let c = Coord::new(1, 3);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(Coord::new(2, 2).cmp(&Coord::new(2, 2)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn step_in_range() {
        let c = Coord::new(3, 4);
        assert_eq!(c.step(0, 1), Some(Coord::new(3, 5)));
        assert_eq!(c.step(-1, 0), Some(Coord::new(2, 4)));
    }

    #[test]
    fn step_rejects_underflow() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(-1, 0), None);
        assert_eq!(origin.step(0, -1), None);
    }

    #[test]
    fn step_rejects_overflow() {
        let edge = Coord::new(u16::MAX, u16::MAX);
        assert_eq!(edge.step(1, 0), None);
        assert_eq!(edge.step(0, 1), None);
    }

    #[test]
    fn manhattan_distance() {
        let a = Coord::new(2, 3);
        assert_eq!(a.manhattan(Coord::new(2, 4)), 1);
        assert_eq!(a.manhattan(Coord::new(3, 3)), 1);
        assert_eq!(a.manhattan(Coord::new(0, 0)), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn cardinals_are_unit_steps() {
        for (dr, dc) in Coord::CARDINALS {
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }
}
