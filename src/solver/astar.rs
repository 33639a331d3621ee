use grid_util::point::Point;
use log::debug;

use crate::grid_graph::GridGraph;
use crate::priority_queue::PriorityQueue;
use crate::solver::{Advance, GridSolver, RELAX_ORDER};

/// Manhattan distance, admissible for 4-connected moves with travel costs of at least 1.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i64 {
    (i64::from(p1.x) - i64::from(p2.x)).abs() + (i64::from(p1.y) - i64::from(p2.y)).abs()
}

/// A* ordered on cost-to-start plus [manhattan_distance] to the goal. Stops the first
/// time the goal leaves the queue.
#[derive(Debug)]
pub struct AstarSolver {
    start: Point,
    goal: Point,
    queue: PriorityQueue<(Point, i64), i64>,
}

impl AstarSolver {
    pub fn new(start: Point, goal: Point) -> AstarSolver {
        AstarSolver {
            start,
            goal,
            queue: PriorityQueue::new(),
        }
    }

    pub fn heuristic(&self, point: &Point) -> i64 {
        manhattan_distance(point, &self.goal)
    }
}

impl GridSolver for AstarSolver {
    fn start(&self) -> Point {
        self.start
    }

    fn goal(&self) -> Point {
        self.goal
    }

    fn begin(&mut self, grid: &mut GridGraph) {
        self.queue.clear();
        grid.node_mut(self.start).cost_to_start = 0;
        self.queue.enqueue((self.start, 0), 0);
    }

    fn advance(&mut self, grid: &mut GridGraph) -> Advance {
        loop {
            let Ok((current, cost)) = self.queue.dequeue() else {
                return Advance::Exhausted {
                    goal_reached: false,
                };
            };
            if cost > grid.node(current).cost_to_start {
                debug!("Skipping stale queue entry for {:?} at cost {}", current, cost);
                continue;
            }
            if current == self.goal {
                self.queue.clear();
                return Advance::ReachedGoal(current);
            }
            for dir in RELAX_ORDER {
                let Some(next) = grid.open_neighbour(current, dir) else {
                    continue;
                };
                let estimate = self.heuristic(&next);
                let node = grid.node_mut(next);
                let new_cost = cost + i64::from(node.travel_cost());
                if new_cost < node.cost_to_start {
                    node.cost_to_start = new_cost;
                    node.predecessor = Some(current);
                    self.queue.enqueue((next, new_cost), new_cost + estimate);
                }
            }
            return Advance::Expanded(current);
        }
    }
}
