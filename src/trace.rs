use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

use crate::grid_graph::GridGraph;
use crate::search::{Outcome, Role, SearchEvent, Visit};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Everything a completed [Search](crate::search::Search) reported, in order.
#[derive(Clone, Debug)]
pub struct SearchTrace {
    start: Point,
    goal: Point,
    visits: Vec<Visit>,
    /// Latest role of every reported cell, ordered by first report.
    roles: FxIndexMap<Point, Role>,
    outcome: Outcome,
}

impl SearchTrace {
    pub(crate) fn new(start: Point, goal: Point) -> SearchTrace {
        SearchTrace {
            start,
            goal,
            visits: Vec::new(),
            roles: FxIndexMap::default(),
            outcome: Outcome::NoPathFound,
        }
    }

    pub(crate) fn record(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Visit(visit) => {
                self.roles.insert(visit.position, visit.role);
                self.visits.push(visit);
            }
            SearchEvent::Finished(outcome) => self.outcome = outcome,
        }
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn role(&self, point: &Point) -> Option<Role> {
        self.roles.get(point).copied()
    }

    /// Cells taken off the frontier, in processing order.
    pub fn expanded(&self) -> Vec<Point> {
        self.visits
            .iter()
            .filter(|v| v.role != Role::OnFinalPath)
            .map(|v| v.position)
            .collect()
    }

    /// Number of processing steps the search took.
    pub fn steps(&self) -> usize {
        self.visits
            .iter()
            .filter(|v| v.role != Role::OnFinalPath)
            .count()
    }

    /// Cells in the order they were first reported.
    pub fn reported_cells(&self) -> impl Iterator<Item = (&Point, &Role)> {
        self.roles.iter()
    }

    /// Draws the grid with `S` start, `G` goal, `*` final path, `o` visited, `#` wall
    /// and `.` for cells the search never touched.
    pub fn render(&self, grid: &GridGraph) -> String {
        let mut out = String::new();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let p = Point::new(x, y);
                let c = if p == self.start {
                    'S'
                } else if p == self.goal {
                    'G'
                } else {
                    match self.role(&p) {
                        Some(Role::OnFinalPath) => '*',
                        Some(_) => 'o',
                        None if !grid.node(p).traversable() => '#',
                        None => '.',
                    }
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}
