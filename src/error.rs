//! Error type shared by the grid, the priority queue and the layout parser.

use thiserror::Error;

/// Errors raised by grid construction, lookups and queue operations.
///
/// A search that cannot reach its goal is not an error: it finishes with
/// [Outcome::NoPathFound](crate::search::Outcome::NoPathFound).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate outside `[0, width) x [0, height)`.
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Grids are at least 1x1 and hold at most
    /// [MAX_NODE_COUNT](crate::grid_graph::MAX_NODE_COUNT) cells.
    #[error("invalid grid dimensions {width}x{height}, both must be at least 1 and the grid at most {} cells", crate::grid_graph::MAX_NODE_COUNT)]
    InvalidDimensions { width: i64, height: i64 },

    /// Travel costs are at least 1.
    #[error("invalid travel cost {cost} at ({x}, {y}), must be at least 1")]
    InvalidTravelCost { x: i32, y: i32, cost: i32 },

    /// Dequeue on an empty [PriorityQueue](crate::priority_queue::PriorityQueue).
    #[error("dequeue on an empty priority queue")]
    EmptyQueue,

    /// Malformed ASCII layout.
    #[error("layout error: {0}")]
    Layout(String),

    #[error("unknown algorithm '{0}', expected one of bfs, dfs, dijkstra, astar")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
