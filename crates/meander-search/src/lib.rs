//! Randomized depth-first path search over a blocked/unblocked grid.
//!
//! This crate finds a contiguous sequence of exactly N cardinal-adjacent,
//! unblocked cells in a [`meander_core::Grid`]:
//!
//! - **Single-threaded** search ([`find_path`]) — deterministic for a
//!   fixed random seed.
//! - **Parallel** search ([`find_path_parallel`]) — a fixed pool of worker
//!   threads racing independent attempts over a shared used-starting-points
//!   registry; the first full-length path wins.
//!
//! Both forms share the same backtracking core and the same support
//! structures: the capacity-bounded [`Path`] buffer and the sorted
//! [`PointSet`].
//!
//! The returned path is the *first* one of the target length found, not a
//! shortest or otherwise optimal one, and a `None` result does not
//! distinguish "no such path exists" from "none was found within the
//! random starting-point budget".

mod dfs;
mod parallel;
mod path;
mod points;

pub use dfs::{SearchMode, find_path, search};
pub use parallel::{DEFAULT_WORKERS, ParallelOptions, find_path_parallel};
pub use path::Path;
pub use points::PointSet;
