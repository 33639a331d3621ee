use core::fmt;
use grid_util::point::Point;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grid_graph::GridGraph;
use crate::search::Search;
use crate::solver::Algorithm;
use crate::trace::SearchTrace;

/// A grid together with the start and goal to search between, usually parsed from an
/// ASCII layout:
///
/// ```text
/// S.#.
/// .9#.
/// ...G
/// ```
///
/// `#` is a wall, `.` a cell of cost 1, `1`-`9` a cell of that cost, and `S`/`G` the
/// start and goal (cost 1). Blank lines around the layout and surrounding whitespace
/// on each row are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub grid: GridGraph,
    pub start: Point,
    pub goal: Point,
}

impl Scenario {
    /// Starts `algorithm` on the scenario grid. As with [GridGraph::search], the grid's
    /// search state is left as it is.
    pub fn search(&mut self, algorithm: Algorithm) -> Result<Search<'_>> {
        self.grid.search(algorithm, self.start, self.goal)
    }

    /// Clears the search state, then runs `algorithm` to completion.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<SearchTrace> {
        self.grid.reset_search_state();
        Ok(self.search(algorithm)?.run())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Scenario> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => return Err(Error::Layout("empty layout".to_owned())),
        };
        let width = rows[0].chars().count();
        if let Some((y, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.chars().count() != width)
        {
            return Err(Error::Layout(format!(
                "row {} has {} cells, expected {}",
                y,
                row.chars().count(),
                width
            )));
        }

        let mut grid = GridGraph::new(width, rows.len())?;
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match c {
                    '#' => grid.set_traversable(p, false)?,
                    '.' => {}
                    'S' | 'G' => {
                        let slot = if c == 'S' { &mut start } else { &mut goal };
                        if slot.replace(p).is_some() {
                            return Err(Error::Layout(format!("more than one '{}'", c)));
                        }
                    }
                    '0'..='9' => {
                        let cost = c.to_digit(10).map_or(0, |d| d as i32);
                        grid.set_travel_cost(p, cost)?;
                    }
                    _ => {
                        return Err(Error::Layout(format!(
                            "unexpected '{}' at ({}, {})",
                            c, x, y
                        )))
                    }
                }
            }
        }
        match (start, goal) {
            (Some(start), Some(goal)) => Ok(Scenario { grid, start, goal }),
            (None, _) => Err(Error::Layout("missing start 'S'".to_owned())),
            (_, None) => Err(Error::Layout("missing goal 'G'".to_owned())),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let p = Point::new(x, y);
                let node = self.grid.node(p);
                if p == self.start {
                    write!(f, "S")?;
                } else if p == self.goal {
                    write!(f, "G")?;
                } else if !node.traversable() {
                    write!(f, "#")?;
                } else if node.travel_cost() == 1 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", node.travel_cost())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
