use grid_util::point::Point;
use log::debug;

use crate::grid_graph::GridGraph;
use crate::node::UNVISITED_COST;
use crate::priority_queue::PriorityQueue;
use crate::solver::{Advance, GridSolver, RELAX_ORDER};

/// Dijkstra's algorithm keyed on cost-to-start.
///
/// The first time the goal is dequeued its cost becomes an upper bound: later
/// relaxations that cannot beat it are dropped. By default the queue is still drained
/// afterwards; set `stop_at_goal` to end the search right there instead. Both settings
/// find the same path.
#[derive(Debug)]
pub struct DijkstraSolver {
    pub stop_at_goal: bool,
    start: Point,
    goal: Point,
    queue: PriorityQueue<(Point, i64), i64>,
    best_goal_cost: i64,
}

impl DijkstraSolver {
    pub fn new(start: Point, goal: Point) -> DijkstraSolver {
        DijkstraSolver {
            stop_at_goal: false,
            start,
            goal,
            queue: PriorityQueue::new(),
            best_goal_cost: UNVISITED_COST,
        }
    }

    /// Cost of the goal once it has been dequeued, [UNVISITED_COST] before that.
    pub fn best_goal_cost(&self) -> i64 {
        self.best_goal_cost
    }

    fn relax_neighbours(&mut self, grid: &mut GridGraph, current: Point) {
        let current_cost = grid.node(current).cost_to_start;
        for dir in RELAX_ORDER {
            let Some(next) = grid.open_neighbour(current, dir) else {
                continue;
            };
            let node = grid.node_mut(next);
            let new_cost = current_cost + i64::from(node.travel_cost());
            if new_cost < node.cost_to_start && new_cost < self.best_goal_cost {
                node.cost_to_start = new_cost;
                node.predecessor = Some(current);
                self.queue.enqueue((next, new_cost), new_cost);
            }
        }
    }
}

impl GridSolver for DijkstraSolver {
    fn start(&self) -> Point {
        self.start
    }

    fn goal(&self) -> Point {
        self.goal
    }

    fn begin(&mut self, grid: &mut GridGraph) {
        self.queue.clear();
        self.best_goal_cost = UNVISITED_COST;
        grid.node_mut(self.start).cost_to_start = 0;
        self.queue.enqueue((self.start, 0), 0);
    }

    fn advance(&mut self, grid: &mut GridGraph) -> Advance {
        loop {
            let Ok((current, cost)) = self.queue.dequeue() else {
                return Advance::Exhausted {
                    goal_reached: self.best_goal_cost != UNVISITED_COST,
                };
            };
            // Superseded by a cheaper entry for the same node.
            if cost > grid.node(current).cost_to_start {
                debug!("Skipping stale queue entry for {:?} at cost {}", current, cost);
                continue;
            }
            if current == self.goal && self.best_goal_cost == UNVISITED_COST {
                self.best_goal_cost = cost;
                if self.stop_at_goal {
                    self.queue.clear();
                    return Advance::ReachedGoal(current);
                }
            }
            self.relax_neighbours(grid, current);
            return Advance::Expanded(current);
        }
    }
}
