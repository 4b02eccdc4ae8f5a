//! **meander-core** — grid world model for the *meander* path finder.
//!
//! This crate provides the foundational types shared by the search engine
//! and the command-line front end: a 16-bit grid coordinate and the
//! blocked/unblocked cell grid the search walks over.

pub mod coord;
pub mod grid;

pub use coord::Coord;
pub use grid::Grid;
