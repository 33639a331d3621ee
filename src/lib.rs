//! # grid_search
//!
//! Stepwise versions of four classic searches on a weighted 4-connected grid:
//! [breadth-first](solver::bfs), [depth-first](solver::dfs),
//! [Dijkstra](solver::dijkstra) and [A*](solver::astar). Instead of returning only a
//! path, a [Search] hands out one [SearchEvent] per processed cell so a front end can
//! animate the frontier at whatever pace it likes.
//!
//! The cost-ordered searches use the tree-backed [PriorityQueue], which keeps equal
//! priorities in insertion order.
//!
//! ```
//! use grid_search::{Algorithm, GridGraph, Point};
//!
//! let mut grid = GridGraph::new(3, 3).unwrap();
//! grid.set_traversable(Point::new(1, 1), false).unwrap();
//! let trace = grid
//!     .search(Algorithm::Astar, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap()
//!     .run();
//! assert_eq!(trace.outcome().cost(), Some(4));
//! ```
pub mod direction;
pub mod error;
pub mod grid_graph;
pub mod node;
pub mod priority_queue;
pub mod scenario;
pub mod search;
pub mod solver;
pub mod trace;

pub use direction::{direction_order, Direction};
pub use error::{Error, Result};
pub use grid_graph::{GridGraph, MAX_NODE_COUNT};
pub use grid_util::point::Point;
pub use node::{EdgeRef, Node, DEFAULT_TRAVEL_COST, UNVISITED_COST};
pub use priority_queue::PriorityQueue;
pub use scenario::Scenario;
pub use search::{Outcome, Role, Search, SearchEvent, Visit};
pub use solver::{Advance, Algorithm, GridSolver};
pub use trace::SearchTrace;
