//! The step protocol shared by every solver.
//!
//! A [Search] borrows its grid mutably for as long as it lives, so only one search can
//! run against a grid at a time. Each call to [Search::step] processes at most one
//! frontier node and returns the resulting [SearchEvent]; once the run is over the
//! final-path events and a single [SearchEvent::Finished] are handed out. Pacing is up
//! to the caller: a renderer can call `step` once per frame, a test can just iterate.

use grid_util::point::Point;
use log::{info, warn};
use std::collections::VecDeque;

use crate::error::Result;
use crate::grid_graph::GridGraph;
use crate::solver::{reconstruct_path, Advance, Algorithm, GridSolver};
use crate::trace::SearchTrace;

/// How a visited cell should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    Goal,
    Visited,
    OnFinalPath,
}

/// A cell reported by a search. `step` is the index of the processing step that
/// produced it; final-path cells carry the number of steps the search took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub position: Point,
    pub role: Role,
    pub step: usize,
}

/// Terminal result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `path` runs from start to goal; `cost` is the sum of the travel costs of every
    /// cell entered after the start.
    PathFound { path: Vec<Point>, cost: i64 },
    NoPathFound,
}

impl Outcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Outcome::PathFound { path, .. } => Some(path),
            Outcome::NoPathFound => None,
        }
    }

    pub fn cost(&self) -> Option<i64> {
        match self {
            Outcome::PathFound { cost, .. } => Some(*cost),
            Outcome::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::PathFound { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    Visit(Visit),
    Finished(Outcome),
}

/// Drives a [GridSolver] one node at a time. Also an [Iterator] over its events.
pub struct Search<'g, S = Box<dyn GridSolver>> {
    grid: &'g mut GridGraph,
    solver: S,
    steps: usize,
    pending: VecDeque<SearchEvent>,
    finished: bool,
}

impl<'g, S: GridSolver> Search<'g, S> {
    /// Starts `solver` on `grid`. The grid's search state must be clear, see
    /// [GridGraph::reset_search_state].
    pub fn new(grid: &'g mut GridGraph, mut solver: S) -> Result<Search<'g, S>> {
        let (start, goal) = (solver.start(), solver.goal());
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        info!("Searching from {:?} to {:?}", start, goal);
        solver.begin(grid);
        Ok(Search {
            grid,
            solver,
            steps: 0,
            pending: VecDeque::new(),
            finished: false,
        })
    }

    pub fn start(&self) -> Point {
        self.solver.start()
    }

    pub fn goal(&self) -> Point {
        self.solver.goal()
    }

    /// Number of frontier nodes processed so far.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// True once the outcome is known. Events may still be pending.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Read access to the grid between steps, for rendering cost and predecessor state.
    pub fn grid(&self) -> &GridGraph {
        &*self.grid
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Advances the search by one event. Returns `None` after the
    /// [SearchEvent::Finished] event has been handed out.
    pub fn step(&mut self) -> Option<SearchEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if self.finished {
            return None;
        }
        match self.solver.advance(self.grid) {
            Advance::Expanded(point) => Some(self.visit(point)),
            Advance::ReachedGoal(point) => {
                let event = self.visit(point);
                self.finish(true);
                Some(event)
            }
            Advance::Exhausted { goal_reached } => {
                self.finish(goal_reached);
                self.pending.pop_front()
            }
        }
    }

    /// Runs the search to completion and collects everything it reports.
    pub fn run(mut self) -> SearchTrace {
        let mut trace = SearchTrace::new(self.start(), self.goal());
        while let Some(event) = self.step() {
            trace.record(event);
        }
        trace
    }

    fn visit(&mut self, position: Point) -> SearchEvent {
        let role = if position == self.start() {
            Role::Start
        } else if position == self.goal() {
            Role::Goal
        } else {
            Role::Visited
        };
        let step = self.steps;
        self.steps += 1;
        SearchEvent::Visit(Visit {
            position,
            role,
            step,
        })
    }

    fn finish(&mut self, goal_reached: bool) {
        self.finished = true;
        let (start, goal) = (self.start(), self.goal());
        let outcome = if goal_reached {
            match reconstruct_path(self.grid, start, goal) {
                Some(path) => {
                    // Walk back from the goal; start and goal keep their own roles.
                    for &position in path.iter().rev().skip(1) {
                        if position == start {
                            break;
                        }
                        self.pending.push_back(SearchEvent::Visit(Visit {
                            position,
                            role: Role::OnFinalPath,
                            step: self.steps,
                        }));
                    }
                    let cost = path
                        .iter()
                        .skip(1)
                        .map(|p| i64::from(self.grid.node(*p).travel_cost()))
                        .sum();
                    info!(
                        "Path of {} cells found after {} steps",
                        path.len(),
                        self.steps
                    );
                    Outcome::PathFound { path, cost }
                }
                None => {
                    warn!(
                        "Predecessors of {:?} do not lead back to {:?}, was the search state reset?",
                        goal, start
                    );
                    Outcome::NoPathFound
                }
            }
        } else {
            warn!("{:?} is not reachable from {:?}", goal, start);
            Outcome::NoPathFound
        };
        self.pending.push_back(SearchEvent::Finished(outcome));
    }
}

impl<S: GridSolver> Iterator for Search<'_, S> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        self.step()
    }
}

impl GridGraph {
    /// Starts `algorithm` from `start` to `goal` with default solver settings.
    pub fn search(&mut self, algorithm: Algorithm, start: Point, goal: Point) -> Result<Search<'_>> {
        Search::new(self, algorithm.solver(start, goal))
    }
}
