use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::node::{Node, DEFAULT_TRAVEL_COST};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;

/// [GridGraph] owns a row-major grid of [Node]s (index `x + y * width`). Neighbour links
/// are coordinates resolved through the grid, so the nodes hold no references to each
/// other. The per-node search state is shared by every search run on the grid and must
/// be cleared with [reset_search_state](Self::reset_search_state) between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGraph {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
}

impl Default for GridGraph {
    fn default() -> GridGraph {
        GridGraph {
            width: 1,
            height: 1,
            nodes: vec![Node::new(Point::new(0, 0), 1, 1)],
        }
    }
}

/// Largest number of cells a grid may hold. A path visits each cell at most once, so
/// with travel costs up to `i32::MAX` every path cost, and every A* priority on top of
/// it, fits in an `i64` below [UNVISITED_COST](crate::node::UNVISITED_COST).
pub const MAX_NODE_COUNT: u64 = u32::MAX as u64;

fn check_dimensions(width: i64, height: i64) -> Result<(usize, usize)> {
    if width < 1
        || height < 1
        || width > i32::MAX as i64
        || height > i32::MAX as i64
        || (width * height) as u64 > MAX_NODE_COUNT
    {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok((width as usize, height as usize))
}

impl GridGraph {
    /// A `width` x `height` grid of traversable cells with the default travel cost.
    pub fn new(width: usize, height: usize) -> Result<GridGraph> {
        let mut grid = GridGraph::default();
        grid.resize(width, height)?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.width * self.height
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub(crate) fn check_bounds(&self, point: Point) -> Result<()> {
        if self.point_in_bounds(point) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Index of an in-bounds point in the flattened node vector.
    fn ix(&self, point: Point) -> usize {
        point.x as usize + point.y as usize * self.width
    }

    pub fn get_node(&self, x: i32, y: i32) -> Result<&Node> {
        self.get_node_at(Point::new(x, y))
    }

    pub fn get_node_at(&self, point: Point) -> Result<&Node> {
        self.check_bounds(point)?;
        Ok(&self.nodes[self.ix(point)])
    }

    /// Lookup for points the caller already knows to be in bounds, such as connected
    /// edge targets.
    pub(crate) fn node(&self, point: Point) -> &Node {
        &self.nodes[self.ix(point)]
    }

    pub(crate) fn node_mut(&mut self, point: Point) -> &mut Node {
        let ix = self.ix(point);
        &mut self.nodes[ix]
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn set_traversable(&mut self, point: Point, traversable: bool) -> Result<()> {
        self.check_bounds(point)?;
        self.node_mut(point).set_traversable(traversable);
        Ok(())
    }

    pub fn set_travel_cost(&mut self, point: Point, cost: i32) -> Result<()> {
        self.check_bounds(point)?;
        if cost < 1 {
            return Err(Error::InvalidTravelCost {
                x: point.x,
                y: point.y,
                cost,
            });
        }
        self.node_mut(point).set_travel_cost(cost);
        Ok(())
    }

    /// Rebuilds the grid at the new size. Cells inside both the old and the new bounds
    /// keep their traversability and travel cost, new cells get the defaults, and every
    /// edge is recomputed. Search state is discarded for all cells.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let (width, height) = check_dimensions(width as i64, height as i64)?;
        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let point = Point::new(x as i32, y as i32);
                let node = if x < self.width && y < self.height {
                    let old = &self.nodes[self.ix(point)];
                    Node::with_content(point, width, height, old.traversable(), old.travel_cost())
                } else {
                    Node::with_content(point, width, height, true, DEFAULT_TRAVEL_COST)
                };
                nodes.push(node);
            }
        }
        debug!(
            "Resized grid from {}x{} to {}x{}",
            self.width, self.height, width, height
        );
        self.nodes = nodes;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Clears the cost and predecessor written by the previous search on every node.
    pub fn reset_search_state(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset_search_state();
        }
    }

    /// Position of the neighbour of `point` in `dir` if the edge is connected and the
    /// neighbour can be entered.
    pub(crate) fn open_neighbour(&self, point: Point, dir: Direction) -> Option<Point> {
        self.node(point)
            .neighbour(dir)
            .filter(|&p| self.node(p).traversable())
    }

    /// Generates a [UnionFind] structure linking every traversable cell to its
    /// traversable 4-neighbours.
    pub fn components(&self) -> UnionFind<usize> {
        info!("Generating connected components");
        let mut components = UnionFind::new(self.node_count());
        for node in self.nodes.iter().filter(|n| n.traversable()) {
            let parent_ix = self.ix(node.position());
            for dir in [Direction::Right, Direction::Down] {
                if let Some(p) = self.open_neighbour(node.position(), dir) {
                    components.union(parent_ix, self.ix(p));
                }
            }
        }
        components
    }

    /// Checks if start and goal are traversable and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.point_in_bounds(*start) || !self.point_in_bounds(*goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        self.node(*start).traversable()
            && self.node(*goal).traversable()
            && self.components().equiv(self.ix(*start), self.ix(*goal))
    }

    /// Sum of the entry costs of every cell on `path` after the first.
    pub fn path_cost(&self, path: &[Point]) -> Result<i64> {
        path.iter().skip(1).try_fold(0i64, |total, p| {
            Ok(total + i64::from(self.get_node_at(*p)?.travel_cost()))
        })
    }

    /// True if `path` is non-empty, every cell on it lies in the grid and each step moves
    /// to a traversable 4-neighbour.
    pub fn is_valid_path(&self, path: &[Point]) -> bool {
        !path.is_empty()
            && path.iter().all(|p| self.point_in_bounds(*p))
            && path.iter().tuple_windows().all(|(a, b)| {
                Direction::ALL
                    .iter()
                    .any(|&dir| self.open_neighbour(*a, dir) == Some(*b))
            })
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.width, self.height)?;
        for row in self.nodes.chunks(self.width) {
            let values = row
                .iter()
                .map(|n| {
                    if n.traversable() {
                        n.travel_cost().to_string()
                    } else {
                        "#".to_owned()
                    }
                })
                .join(" ");
            writeln!(f, "{}", values)?;
        }
        Ok(())
    }
}
