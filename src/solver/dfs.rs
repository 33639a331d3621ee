use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::direction::{direction_order, Direction};
use crate::grid_graph::GridGraph;
use crate::solver::{claim_neighbour, Advance, GridSolver};

/// Depth-first search over a LIFO frontier, steered by [direction_order] so the moves
/// heading towards the goal are tried first. Paths are not shortest.
#[derive(Clone, Debug)]
pub struct DepthFirstSolver {
    start: Point,
    goal: Point,
    order: [Direction; 4],
    stack: Vec<Point>,
    stacked: FxHashSet<Point>,
}

impl DepthFirstSolver {
    pub fn new(start: Point, goal: Point) -> DepthFirstSolver {
        DepthFirstSolver {
            start,
            goal,
            order: direction_order(&start, &goal),
            stack: Vec::new(),
            stacked: FxHashSet::default(),
        }
    }

    /// Preferred move directions, most preferred first.
    pub fn order(&self) -> [Direction; 4] {
        self.order
    }
}

impl GridSolver for DepthFirstSolver {
    fn start(&self) -> Point {
        self.start
    }

    fn goal(&self) -> Point {
        self.goal
    }

    fn begin(&mut self, _grid: &mut GridGraph) {
        self.stack.clear();
        self.stacked.clear();
        self.stack.push(self.start);
        self.stacked.insert(self.start);
    }

    fn advance(&mut self, grid: &mut GridGraph) -> Advance {
        let Some(current) = self.stack.pop() else {
            return Advance::Exhausted {
                goal_reached: false,
            };
        };
        self.stacked.remove(&current);
        if current == self.goal {
            self.stack.clear();
            self.stacked.clear();
            return Advance::ReachedGoal(current);
        }
        // Pushed in reverse so the preferred direction ends up on top.
        for &dir in self.order.iter().rev() {
            if let Some(next) = claim_neighbour(grid, current, dir, self.start, &mut self.stacked) {
                self.stack.push(next);
            }
        }
        Advance::Expanded(current)
    }
}
