//! **wayfind-core** — grid model for the *wayfind* pathfinding crates.
//!
//! This crate provides the types every search operates on: the
//! [`Position`] coordinate, the static [`OccupancyGrid`] of walkable and
//! blocked cells, and the [`GridError`] raised when a grid is malformed.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Position;
pub use grid::{BLOCKED, OccupancyGrid, WALKABLE};
