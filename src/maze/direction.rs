use std::fmt;

use super::Coord;

/// The four cardinal directions, in clockwise order starting from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in a cell's edge slots.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::ALL.get(index).copied()
    }

    pub fn rotate_clockwise(self) -> Direction {
        Direction::ALL[(self.index() + 1) % 4]
    }

    pub fn rotate_counter_clockwise(self) -> Direction {
        Direction::ALL[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Steps one cell from `coord`, or `None` if that leaves a `width` x `height` grid.
    pub fn offset(self, coord: Coord, width: u16, height: u16) -> Option<Coord> {
        let (x, y) = coord;
        let next = match self {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::East => (x.checked_add(1)?, y),
            Direction::South => (x, y.checked_add(1)?),
            Direction::West => (x.checked_sub(1)?, y),
        };
        (next.0 < width && next.1 < height).then_some(next)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Snapshot of one flag per direction, e.g. which edges of a cell are open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Directions {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Directions {
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::North => self.north = value,
            Direction::East => self.east = value,
            Direction::South => self.south = value,
            Direction::West => self.west = value,
        }
    }

    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| self.get(d)).count()
    }

    pub fn inverted(self) -> Directions {
        Directions {
            north: !self.north,
            east: !self.east,
            south: !self.south,
            west: !self.west,
        }
    }
}
