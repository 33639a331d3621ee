use crate::direction::Direction;
use grid_util::point::Point;

/// Sentinel for a node that no cost-ordered search has reached yet. Accumulated costs
/// are kept in `i64` and stay below it on every grid [GridGraph](crate::GridGraph)
/// accepts, see [MAX_NODE_COUNT](crate::grid_graph::MAX_NODE_COUNT).
pub const UNVISITED_COST: i64 = i64::MAX;
/// Travel cost of a freshly created cell.
pub const DEFAULT_TRAVEL_COST: i32 = 1;

/// A link to a neighbouring coordinate. A boundary is flagged with
/// `connected == false` rather than left out, so every node keeps all four slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRef {
    pub position: Point,
    pub connected: bool,
}

/// One grid cell: its configuration plus the transient state a search writes into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    position: Point,
    left: EdgeRef,
    right: EdgeRef,
    up: EdgeRef,
    down: EdgeRef,
    traversable: bool,
    travel_cost: i32,
    pub(crate) cost_to_start: i64,
    pub(crate) predecessor: Option<Point>,
}

impl Node {
    /// A traversable cell of default cost at `position`, linked for a
    /// `width` x `height` grid.
    pub(crate) fn new(position: Point, width: usize, height: usize) -> Node {
        Node::with_content(position, width, height, true, DEFAULT_TRAVEL_COST)
    }

    pub(crate) fn with_content(
        position: Point,
        width: usize,
        height: usize,
        traversable: bool,
        travel_cost: i32,
    ) -> Node {
        let (x, y) = (position.x, position.y);
        let edge = |dir: Direction, connected: bool| EdgeRef {
            position: dir.step(position),
            connected,
        };
        Node {
            position,
            left: edge(Direction::Left, x > 0),
            right: edge(Direction::Right, x < width as i32 - 1),
            up: edge(Direction::Up, y > 0),
            down: edge(Direction::Down, y < height as i32 - 1),
            traversable,
            travel_cost,
            cost_to_start: UNVISITED_COST,
            predecessor: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn edge(&self, dir: Direction) -> &EdgeRef {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    /// Position of the neighbour in `dir`, if that edge is not a boundary.
    pub fn neighbour(&self, dir: Direction) -> Option<Point> {
        let edge = self.edge(dir);
        edge.connected.then_some(edge.position)
    }

    pub fn traversable(&self) -> bool {
        self.traversable
    }

    pub(crate) fn set_traversable(&mut self, traversable: bool) {
        self.traversable = traversable;
    }

    pub fn travel_cost(&self) -> i32 {
        self.travel_cost
    }

    pub(crate) fn set_travel_cost(&mut self, cost: i32) {
        self.travel_cost = cost;
    }

    /// Accumulated cost from the start of the last cost-ordered search, or
    /// [UNVISITED_COST].
    pub fn cost_to_start(&self) -> i64 {
        self.cost_to_start
    }

    /// The node this one was reached from in the last search.
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }

    pub(crate) fn reset_search_state(&mut self) {
        self.cost_to_start = UNVISITED_COST;
        self.predecessor = None;
    }
}
