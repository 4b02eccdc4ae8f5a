//! The randomized DFS-with-backtracking core and the single-threaded
//! search driver.

use std::sync::atomic::{AtomicBool, Ordering};

use meander_core::{Coord, Grid};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::parallel::{ParallelOptions, find_path_parallel};
use crate::path::{Path, fits_budget};
use crate::points::PointSet;

/// How a [`search`] run should be executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// One attempt loop on the calling thread; deterministic per seed.
    Single,
    /// A fixed pool of racing worker threads.
    Parallel { workers: usize },
}

/// The single outward entry point: find a contiguous path of exactly
/// `target` unblocked cells in `grid`, in the requested mode.
///
/// The grid is not mutated. Returns `None` when no path was found —
/// either none of that length is reachable, or none was found within the
/// random starting-point budget; the two are deliberately not
/// distinguished.
///
/// # Panics
///
/// Panics if `target` is zero, or in parallel mode if the worker count is
/// zero.
pub fn search(grid: &Grid, target: usize, mode: SearchMode, seed: u64) -> Option<Path> {
    match mode {
        SearchMode::Single => find_path(grid, target, &mut StdRng::seed_from_u64(seed)),
        SearchMode::Parallel { workers } => {
            find_path_parallel(grid, target, &ParallelOptions { workers, seed })
        }
    }
}

/// Single-threaded randomized DFS search.
///
/// Draws starting points uniformly at random, skipping ones already tried
/// or blocked, and attempts to extend each into a path of exactly
/// `target` cells. The number of attempts is bounded by the grid's
/// unblocked cell count. Fully deterministic for a fixed `rng` state.
///
/// A `target` over 75% of the grid's cell count is reported as not found
/// without searching; constructing a [`Path`] of that capacity directly
/// would panic.
///
/// # Panics
///
/// Panics if `target` is zero.
pub fn find_path(grid: &Grid, target: usize, rng: &mut impl Rng) -> Option<Path> {
    assert!(target > 0, "target path length must be positive");
    if !fits_budget(grid, target) {
        log::warn!(
            "target length {target} exceeds 75% of the {}-cell grid; reporting not found",
            grid.len()
        );
        return None;
    }

    let mut used = PointSet::for_grid(grid);
    let mut visited = PointSet::for_grid(grid);
    let mut path = Path::new(target, grid);

    for _ in 0..grid.unblocked_count() {
        visited.clear();
        path.clear();

        let start = random_coord(grid, rng);
        if used.contains(start) || grid.is_blocked_at(start) {
            continue;
        }
        used.insert(start);
        visited.insert(start);
        path.push(start);

        if extend(grid, &mut path, &mut visited, target, None) {
            return Some(path);
        }
    }
    None
}

/// Draw a uniformly random in-bounds coordinate. `random_range` samples
/// without modulo bias.
pub(crate) fn random_coord(grid: &Grid, rng: &mut impl Rng) -> Coord {
    Coord::new(
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    )
}

/// The recursive backtracking step shared by both search forms.
///
/// Tries to grow `path` to `target` coordinates by stepping through the
/// cardinal directions in fixed east, west, south, north order. A
/// neighbor is rejected if it leaves the coordinate range, falls outside
/// the grid, is blocked, or was already visited in this attempt. Visited
/// cells stay visited when the path pops back over them, so one attempt
/// never re-enters a dead end.
///
/// `cancel`, when present, is the cross-worker found flag: it is polled
/// at the top of every call so a worker unwinds promptly once another
/// worker has won.
pub(crate) fn extend(
    grid: &Grid,
    path: &mut Path,
    visited: &mut PointSet,
    target: usize,
    cancel: Option<&AtomicBool>,
) -> bool {
    if path.len() == target {
        return true;
    }
    if let Some(flag) = cancel {
        if flag.load(Ordering::Acquire) {
            return false;
        }
    }

    let current = path
        .last()
        .expect("extend requires a seeded path with at least the starting point");

    for (dr, dc) in Coord::CARDINALS {
        let Some(next) = current.step(dr, dc) else {
            continue;
        };
        if !grid.in_bounds(next) || grid.is_blocked_at(next) || visited.contains(next) {
            continue;
        }

        visited.insert(next);
        path.push(next);
        if extend(grid, path, visited, target, cancel) {
            return true;
        }
        path.pop();
    }
    false
}
