//! Racing worker threads over shared search state.
//!
//! Each worker runs the same outer attempt loop as the single-threaded
//! search, against one shared used-starting-points registry so workers
//! never retry each other's discarded starts. The first worker to
//! complete a full-length path commits it to a shared winner slot; the
//! rest observe the found flag and unwind. Which worker wins when several
//! succeed is scheduling-dependent and deliberately unspecified.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use meander_core::Grid;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::dfs::{extend, random_coord};
use crate::path::{Path, fits_budget};
use crate::points::PointSet;

/// Default worker pool size.
pub const DEFAULT_WORKERS: usize = 5;

/// Options for [`find_path_parallel`].
#[derive(Clone, Copy, Debug)]
pub struct ParallelOptions {
    /// Number of worker threads. Fixed for the whole run; never resized
    /// to the input.
    pub workers: usize,
    /// Base seed. Worker `i` searches with its own generator seeded from
    /// `seed + i`, so runs with the same seed draw the same starting
    /// points per worker (the winner still depends on scheduling).
    pub seed: u64,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            seed: rand::rng().random(),
        }
    }
}

/// Multi-threaded randomized DFS search.
///
/// Semantics match [`find_path`](crate::find_path) except that attempts
/// race across `opts.workers` threads. The grid is only read while
/// workers run. Returns the winning path, or `None` once every worker
/// has exhausted its attempt budget.
///
/// # Panics
///
/// Panics if `target` is zero or `opts.workers` is zero.
pub fn find_path_parallel(grid: &Grid, target: usize, opts: &ParallelOptions) -> Option<Path> {
    assert!(target > 0, "target path length must be positive");
    assert!(opts.workers > 0, "worker pool cannot be empty");
    if !fits_budget(grid, target) {
        log::warn!(
            "target length {target} exceeds 75% of the {}-cell grid; reporting not found",
            grid.len()
        );
        return None;
    }

    let used = Mutex::new(PointSet::for_grid(grid));
    let winner: Mutex<Option<Path>> = Mutex::new(None);
    let found = AtomicBool::new(false);

    thread::scope(|s| {
        for id in 0..opts.workers {
            let rng = StdRng::seed_from_u64(opts.seed.wrapping_add(id as u64));
            let used = &used;
            let winner = &winner;
            let found = &found;
            s.spawn(move || worker(grid, target, rng, used, winner, found));
        }
    });

    winner.into_inner().expect("winner mutex poisoned")
}

fn worker(
    grid: &Grid,
    target: usize,
    mut rng: StdRng,
    used: &Mutex<PointSet>,
    winner: &Mutex<Option<Path>>,
    found: &AtomicBool,
) {
    let mut visited = PointSet::for_grid(grid);
    let mut path = Path::new(target, grid);

    for _ in 0..grid.unblocked_count() {
        if found.load(Ordering::Acquire) {
            return;
        }
        visited.clear();
        path.clear();

        let start = random_coord(grid, &mut rng);
        // Contains-check-then-add must be one critical section, otherwise
        // two workers can validate the same starting point.
        let claimed = {
            let mut used = used.lock().expect("used-points mutex poisoned");
            used.insert(start)
        };
        if !claimed || grid.is_blocked_at(start) {
            continue;
        }
        visited.insert(start);
        path.push(start);

        if extend(grid, &mut path, &mut visited, target, Some(found)) {
            let mut slot = winner.lock().expect("winner mutex poisoned");
            // Re-check under the lock: another worker may have committed
            // between our success and this acquisition.
            if slot.is_none() {
                *slot = Some(path.clone());
                found.store(true, Ordering::Release);
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meander_core::Coord;

    fn opts(seed: u64) -> ParallelOptions {
        ParallelOptions { workers: 4, seed }
    }

    #[test]
    fn open_grid_scenario_parallel() {
        // Scenario D: the 10x10 length-12 search also succeeds in
        // parallel mode (coordinates may differ from the single-threaded
        // run).
        let grid = Grid::new(10, 10);
        let path = find_path_parallel(&grid, 12, &opts(0x5eed))
            .expect("open grid must yield a path in parallel mode");
        assert_eq!(path.len(), 12);
        assert!(path.is_contiguous());
        let mut seen = PointSet::for_grid(&grid);
        for &c in &path {
            assert!(!grid.is_blocked_at(c));
            assert!(seen.insert(c), "path revisits {c}");
        }
    }

    #[test]
    fn fully_blocked_grid_parallel() {
        let mut grid = Grid::new(8, 8);
        for row in 0..8 {
            for col in 0..8 {
                grid.set_cell(row, col, true);
            }
        }
        assert_eq!(find_path_parallel(&grid, 3, &opts(1)), None);
    }

    #[test]
    fn over_budget_target_parallel() {
        let grid = Grid::new(5, 5);
        assert_eq!(find_path_parallel(&grid, 30, &opts(2)), None);
    }

    #[test]
    fn path_respects_blocked_cells_parallel() {
        let mut grid = Grid::new(8, 8);
        grid.block_cells(&[
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(2, 2),
            Coord::new(3, 3),
            Coord::new(4, 4),
        ]);
        let path = find_path_parallel(&grid, 16, &opts(3)).expect("plenty of open cells remain");
        assert_eq!(path.len(), 16);
        assert!(path.is_contiguous());
        for &c in &path {
            assert!(!grid.is_blocked_at(c));
        }
    }

    #[test]
    fn single_worker_pool_still_finds_paths() {
        let grid = Grid::new(6, 6);
        let path = find_path_parallel(&grid, 9, &ParallelOptions { workers: 1, seed: 11 })
            .expect("one worker behaves like the single-threaded search");
        assert_eq!(path.len(), 9);
        assert!(path.is_contiguous());
    }

    #[test]
    #[should_panic(expected = "worker pool cannot be empty")]
    fn zero_workers_panics() {
        let grid = Grid::new(6, 6);
        let _ = find_path_parallel(&grid, 5, &ParallelOptions { workers: 0, seed: 0 });
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_target_panics_parallel() {
        let grid = Grid::new(6, 6);
        let _ = find_path_parallel(&grid, 0, &opts(0));
    }

    #[test]
    fn default_options_use_fixed_pool() {
        assert_eq!(ParallelOptions::default().workers, DEFAULT_WORKERS);
    }

    #[test]
    fn repeated_runs_always_return_valid_paths() {
        // The winner is scheduling-dependent, but whatever is returned
        // must always be a valid full-length path.
        let mut grid = Grid::new(7, 7);
        grid.block_cells(&[Coord::new(3, 3), Coord::new(3, 4)]);
        for seed in 0..5 {
            let path = find_path_parallel(&grid, 10, &opts(seed)).expect("path exists");
            assert_eq!(path.len(), 10);
            assert!(path.is_contiguous());
        }
    }
}
