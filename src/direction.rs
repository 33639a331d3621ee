use core::fmt;
use grid_util::point::Point;

/// One of the four grid moves. `Up` decreases `y`, `Down` increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx, point.y + dy)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Orders the four directions so that the ones leading from `start` towards `goal`
/// come first. The axis with the larger distance leads; equal distances favour the
/// y axis. A zero delta counts as positive. The result is
/// `[main towards, cross towards, main away, cross away]`.
pub fn direction_order(start: &Point, goal: &Point) -> [Direction; 4] {
    let dx = goal.x - start.x;
    let dy = goal.y - start.y;
    let horizontal = if dx < 0 {
        (Direction::Left, Direction::Right)
    } else {
        (Direction::Right, Direction::Left)
    };
    let vertical = if dy < 0 {
        (Direction::Up, Direction::Down)
    } else {
        (Direction::Down, Direction::Up)
    };
    let (main, cross) = if dx.abs() > dy.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };
    [main.0, cross.0, main.1, cross.1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn order(sx: i32, sy: i32, gx: i32, gy: i32) -> [Direction; 4] {
        direction_order(&Point::new(sx, sy), &Point::new(gx, gy))
    }

    #[test]
    fn horizontal_dominant_cases() {
        assert_eq!(order(5, 5, 0, 4), [Left, Up, Right, Down]);
        assert_eq!(order(5, 5, 0, 6), [Left, Down, Right, Up]);
        assert_eq!(order(5, 5, 9, 4), [Right, Up, Left, Down]);
        assert_eq!(order(5, 5, 9, 6), [Right, Down, Left, Up]);
    }

    #[test]
    fn vertical_dominant_cases() {
        assert_eq!(order(5, 5, 4, 0), [Up, Left, Down, Right]);
        assert_eq!(order(5, 5, 6, 0), [Up, Right, Down, Left]);
        assert_eq!(order(5, 5, 4, 9), [Down, Left, Up, Right]);
        assert_eq!(order(5, 5, 6, 9), [Down, Right, Up, Left]);
    }

    #[test]
    fn ties_favour_vertical_axis() {
        assert_eq!(order(0, 0, 2, 2), [Down, Right, Up, Left]);
        assert_eq!(order(3, 3, 0, 0), [Up, Left, Down, Right]);
        // Same cell: both deltas are zero and count as positive.
        assert_eq!(order(1, 1, 1, 1), [Down, Right, Up, Left]);
    }

    #[test]
    fn every_order_is_a_permutation() {
        for (gx, gy) in [(0, 0), (-3, 1), (2, -7), (4, 4), (-1, -1), (0, 5)] {
            let dirs = order(0, 0, gx, gy);
            for d in Direction::ALL {
                assert_eq!(dirs.iter().filter(|x| **x == d).count(), 1);
            }
        }
    }

    #[test]
    fn opposite_steps_cancel() {
        let p = Point::new(3, 3);
        for d in Direction::ALL {
            assert_eq!(d.opposite().step(d.step(p)), p);
        }
    }
}
