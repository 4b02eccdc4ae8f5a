//! The blocked/unblocked world grid.
//!
//! [`Grid`] owns a dense boolean cell array plus running blocked/unblocked
//! counters that stay consistent across every mutation. Misusing the grid
//! (out-of-bounds access, blocking more cells than exist) is an invariant
//! violation and panics; there is no recoverable error path for it.

use crate::Coord;

/// Minimum number of cells for a usable grid. Degenerate 1–3 cell grids
/// are rejected at construction.
const MIN_CELLS: usize = 4;

/// An R×C grid of blocked/unblocked cells.
///
/// The grid is not internally synchronized. The search engine treats it as
/// read-only once a search begins, so all mutation happens before any
/// worker thread sees it.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: u16,
    cols: u16,
    /// `true` marks a blocked cell, row-major.
    cells: Vec<bool>,
    blocked: u32,
    unblocked: u32,
}

impl Grid {
    /// Create a fully unblocked `rows`×`cols` grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid would hold fewer than four cells.
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = rows as usize * cols as usize;
        assert!(
            len >= MIN_CELLS,
            "a {rows}x{cols} grid is degenerate; at least {MIN_CELLS} cells are required"
        );
        Self {
            rows,
            cols,
            cells: vec![false; len],
            blocked: 0,
            unblocked: len as u32,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells. Construction rejects this, so it
    /// only exists to satisfy the usual `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of blocked cells.
    #[inline]
    pub fn blocked_count(&self) -> u32 {
        self.blocked
    }

    /// Number of unblocked cells.
    #[inline]
    pub fn unblocked_count(&self) -> u32 {
        self.unblocked
    }

    /// Whether no cell has been blocked yet.
    #[inline]
    pub fn is_pristine(&self) -> bool {
        self.blocked == 0
    }

    /// Whether `c` lies inside the grid. This is the non-fatal bounds
    /// query; the accessors below panic on out-of-range coordinates.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    #[inline]
    fn index(&self, row: u16, col: u16) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row},{col}) is out of bounds for a {}x{} grid",
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }

    /// Whether the cell at `(row, col)` is blocked.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[inline]
    pub fn is_blocked(&self, row: u16, col: u16) -> bool {
        self.cells[self.index(row, col)]
    }

    /// [`is_blocked`](Self::is_blocked) taking a [`Coord`].
    #[inline]
    pub fn is_blocked_at(&self, c: Coord) -> bool {
        self.is_blocked(c.row, c.col)
    }

    /// Set the blocked state of one cell, keeping both counters in step.
    ///
    /// Setting a cell to the state it already has changes nothing and is
    /// logged at debug level.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn set_cell(&mut self, row: u16, col: u16, blocked: bool) {
        let idx = self.index(row, col);
        if self.cells[idx] == blocked {
            log::debug!("cell ({row},{col}) already has blocked={blocked}; state unchanged");
            return;
        }
        self.cells[idx] = blocked;
        if blocked {
            self.blocked += 1;
            self.unblocked -= 1;
        } else {
            self.blocked -= 1;
            self.unblocked += 1;
        }
    }

    /// Block every coordinate in `coords`. Duplicates are tolerated (the
    /// second block of the same cell is a no-op).
    ///
    /// # Panics
    ///
    /// Panics if `coords` holds more entries than the grid has cells, or
    /// if any coordinate is out of range.
    pub fn block_cells(&mut self, coords: &[Coord]) {
        assert!(
            coords.len() <= self.len(),
            "cannot block {} cells in a grid of {} cells",
            coords.len(),
            self.len()
        );
        for &c in coords {
            self.set_cell(c.row, c.col, true);
        }
    }

    /// Unblock every cell. Clearing an already pristine grid is a no-op,
    /// logged at debug level.
    pub fn clear(&mut self) {
        if self.blocked == 0 {
            log::debug!("clearing a grid with no blocked cells; nothing to do");
            return;
        }
        self.cells.fill(false);
        self.blocked = 0;
        self.unblocked = self.len() as u32;
    }

    /// Replace the grid with a fresh `rows`×`cols` one. Nothing is
    /// preserved; a resize is destroy-and-recreate by design.
    ///
    /// # Panics
    ///
    /// Panics if the new dimensions are degenerate.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        *self = Self::new(rows, cols);
    }

    /// Count unblocked cells among the four cardinal neighbors of
    /// `(row, col)`. Off-grid neighbors are absent, not blocked.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` itself is out of range.
    pub fn unblocked_neighbors(&self, row: u16, col: u16) -> u16 {
        let _ = self.index(row, col);
        let origin = Coord::new(row, col);
        let mut count = 0;
        for (dr, dc) in Coord::CARDINALS {
            if let Some(n) = origin.step(dr, dc) {
                if self.in_bounds(n) && !self.is_blocked_at(n) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Ratio of blocked to unblocked cells.
    ///
    /// When either counter is zero the ratio is undefined; 1.0 is returned
    /// as the defined fallback and the condition is logged.
    pub fn blocked_ratio(&self) -> f64 {
        if self.blocked == 0 || self.unblocked == 0 {
            log::warn!(
                "blocked/unblocked ratio undefined (blocked={}, unblocked={}); reporting 1.0",
                self.blocked,
                self.unblocked
            );
            return 1.0;
        }
        f64::from(self.blocked) / f64::from(self.unblocked)
    }
}
