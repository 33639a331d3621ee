use crate::direction::Direction;
use crate::grid_graph::GridGraph;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use std::str::FromStr;

use crate::error::Error;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BreadthFirstSolver;
use dfs::DepthFirstSolver;
use dijkstra::DijkstraSolver;

/// Neighbour order used by the cost-ordered searches when relaxing edges.
pub(crate) const RELAX_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

/// What a single call to [GridSolver::advance] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A node was taken off the frontier and expanded.
    Expanded(Point),
    /// The goal was taken off the frontier and the search is over.
    ReachedGoal(Point),
    /// The frontier ran dry. `goal_reached` tells whether the goal was expanded along
    /// the way, which only happens for searches that drain their frontier.
    Exhausted { goal_reached: bool },
}

/// A resumable search from a fixed start to a fixed goal. Each call to
/// [advance](Self::advance) processes exactly one frontier node. Solvers write cost and
/// predecessor into the grid's nodes and expect them to be clear when
/// [begin](Self::begin) is called.
pub trait GridSolver {
    fn start(&self) -> Point;
    fn goal(&self) -> Point;
    /// Seeds the frontier with the start node.
    fn begin(&mut self, grid: &mut GridGraph);
    fn advance(&mut self, grid: &mut GridGraph) -> Advance;
}

impl<S: GridSolver + ?Sized> GridSolver for Box<S> {
    fn start(&self) -> Point {
        (**self).start()
    }
    fn goal(&self) -> Point {
        (**self).goal()
    }
    fn begin(&mut self, grid: &mut GridGraph) {
        (**self).begin(grid)
    }
    fn advance(&mut self, grid: &mut GridGraph) -> Advance {
        (**self).advance(grid)
    }
}

/// Claims the neighbour of `from` in `dir` for an unweighted search: the edge must be
/// connected, the neighbour traversable, not the start, not yet claimed and not waiting
/// in the frontier. The first claim wins and records `from` as predecessor.
pub(crate) fn claim_neighbour(
    grid: &mut GridGraph,
    from: Point,
    dir: Direction,
    start: Point,
    queued: &mut FxHashSet<Point>,
) -> Option<Point> {
    let next = grid.open_neighbour(from, dir)?;
    if next == start || grid.node(next).predecessor.is_some() || queued.contains(&next) {
        return None;
    }
    grid.node_mut(next).predecessor = Some(from);
    queued.insert(next);
    Some(next)
}

/// Follows predecessors from `goal` back to `start` and returns the path in travel
/// order. Gives up on a broken or cyclic chain, which is what stale search state
/// from an earlier run looks like.
pub fn reconstruct_path(grid: &GridGraph, start: Point, goal: Point) -> Option<Vec<Point>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        if path.len() > grid.node_count() {
            return None;
        }
        current = grid.get_node_at(current).ok()?.predecessor()?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

/// The four available searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    /// A solver for this algorithm with its default settings.
    pub fn solver(self, start: Point, goal: Point) -> Box<dyn GridSolver> {
        match self {
            Algorithm::BreadthFirst => Box::new(BreadthFirstSolver::new(start, goal)),
            Algorithm::DepthFirst => Box::new(DepthFirstSolver::new(start, goal)),
            Algorithm::Dijkstra => Box::new(DijkstraSolver::new(start, goal)),
            Algorithm::Astar => Box::new(AstarSolver::new(start, goal)),
        }
    }

    /// Whether a found path is guaranteed to have minimal total travel cost.
    pub fn minimizes_cost(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::Astar));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("greedy".to_owned()))
        );
    }

    #[test]
    fn reconstruct_detects_broken_chains() {
        let mut grid = GridGraph::new(3, 1).unwrap();
        let (a, b, c) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        grid.node_mut(c).predecessor = Some(b);
        assert_eq!(reconstruct_path(&grid, a, c), None);
        grid.node_mut(b).predecessor = Some(a);
        assert_eq!(reconstruct_path(&grid, a, c), Some(vec![a, b, c]));
        // A cycle that never reaches the start.
        grid.node_mut(b).predecessor = Some(c);
        assert_eq!(reconstruct_path(&grid, a, c), None);
        assert_eq!(reconstruct_path(&grid, a, a), Some(vec![a]));
    }
}
