//! Greedy best-first and A* pathfinding on occupancy grids.
//!
//! Both searches move orthogonally with unit cost, use the
//! [`manhattan`] heuristic and share one engine ([`Search`]):
//!
//! - **Greedy best-first** ([`greedy_search`]) orders the frontier by the
//!   heuristic alone. It finds *a* path quickly but not necessarily the
//!   shortest.
//! - **A\*** ([`a_star_search`]) orders by cost so far plus heuristic and
//!   returns a shortest path in edge count.
//!
//! Each call owns all of its search state, so independent searches over one
//! shared `&OccupancyGrid` can run on different threads.
//!
//! [`bfs_distance`] gives the exact shortest edge count by exhaustive
//! breadth-first search, for checking the results above.
//!
//! ```
//! use wayfind_core::{OccupancyGrid, Position};
//! use wayfind_paths::a_star_search;
//!
//! let grid = OccupancyGrid::parse("..#\n...\n#..").unwrap();
//! let path = a_star_search(&grid, Position::new(0, 0), Position::new(2, 2))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```

mod bfs;
mod distance;
mod frontier;
mod neighbors;
mod node;
mod path;
mod search;
mod traits;

pub use bfs::{UNREACHABLE, bfs_distance, bfs_map};
pub use distance::manhattan;
pub use frontier::Frontier;
pub use neighbors::neighbors;
pub use node::{Ancestors, NodeArena, NodeId, SearchNode};
pub use path::{build_path, is_valid_path};
pub use search::{
    Endpoint, Search, SearchError, SearchReport, SearchState, SearchStats, Strategy,
    a_star_search, greedy_search, search,
};
pub use traits::Pather;
