use fxhash::FxHashSet;
use grid_util::point::Point;
use std::collections::VecDeque;

use crate::direction::Direction;
use crate::grid_graph::GridGraph;
use crate::solver::{claim_neighbour, Advance, GridSolver};

/// Order in which an expanded node offers its neighbours.
const EXPANSION_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Breadth-first search over a FIFO frontier. Finds a path with the fewest moves,
/// ignoring travel cost.
#[derive(Clone, Debug)]
pub struct BreadthFirstSolver {
    start: Point,
    goal: Point,
    frontier: VecDeque<Point>,
    queued: FxHashSet<Point>,
}

impl BreadthFirstSolver {
    pub fn new(start: Point, goal: Point) -> BreadthFirstSolver {
        BreadthFirstSolver {
            start,
            goal,
            frontier: VecDeque::new(),
            queued: FxHashSet::default(),
        }
    }
}

impl GridSolver for BreadthFirstSolver {
    fn start(&self) -> Point {
        self.start
    }

    fn goal(&self) -> Point {
        self.goal
    }

    fn begin(&mut self, _grid: &mut GridGraph) {
        self.frontier.clear();
        self.queued.clear();
        self.frontier.push_back(self.start);
        self.queued.insert(self.start);
    }

    fn advance(&mut self, grid: &mut GridGraph) -> Advance {
        let Some(current) = self.frontier.pop_front() else {
            return Advance::Exhausted {
                goal_reached: false,
            };
        };
        self.queued.remove(&current);
        if current == self.goal {
            return Advance::ReachedGoal(current);
        }
        for dir in EXPANSION_ORDER {
            if let Some(next) = claim_neighbour(grid, current, dir, self.start, &mut self.queued) {
                self.frontier.push_back(next);
            }
        }
        Advance::Expanded(current)
    }
}
