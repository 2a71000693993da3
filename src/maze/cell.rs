use crossterm::style::{Color, Stylize};

use std::fmt;

use super::{Coord, Direction, Directions};

/// A live maze cell: its coordinate and one edge slot per direction.
///
/// An edge slot holds the arena index of the linked neighbour. The owning
/// [`Maze`](super::Maze) keeps the slots symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    links: [Option<usize>; 4],
}

impl Cell {
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            links: [None; 4],
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> u16 {
        self.coord.0
    }

    pub fn y(&self) -> u16 {
        self.coord.1
    }

    /// Arena index of the cell linked in `direction`, if any.
    pub fn link(&self, direction: Direction) -> Option<usize> {
        self.links[direction.index()]
    }

    pub(super) fn set_link(&mut self, direction: Direction, target: Option<usize>) {
        self.links[direction.index()] = target;
    }

    pub fn is_linked(&self, direction: Direction) -> bool {
        self.links[direction.index()].is_some()
    }

    pub fn link_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    pub fn unblocked_directions(&self) -> Directions {
        Directions {
            north: self.is_linked(Direction::North),
            east: self.is_linked(Direction::East),
            south: self.is_linked(Direction::South),
            west: self.is_linked(Direction::West),
        }
    }
}

/// One-column box-drawing glyph for a cell, chosen from its open directions.
/// `None` is a removed cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGlyph(pub Option<Directions>);

impl CellGlyph {
    pub fn symbol(&self) -> &'static str {
        let Some(dirs) = self.0 else {
            return "#";
        };
        match (dirs.north, dirs.east, dirs.south, dirs.west) {
            (true, true, true, true) => "╬",
            (true, true, true, false) => "╠",
            (true, false, true, true) => "╣",
            (true, true, false, true) => "╩",
            (false, true, true, true) => "╦",
            (true, true, false, false) => "╚",
            (true, false, false, true) => "╝",
            (true, false, true, false) => "║",
            (false, true, false, true) => "═",
            (false, false, true, true) => "╗",
            (false, true, true, false) => "╔",
            (true, false, false, false) => "╨",
            (false, false, true, false) => "╥",
            (false, true, false, false) => "╞",
            (false, false, false, true) => "╡",
            (false, false, false, false) => " ",
        }
    }
}

impl fmt::Display for CellGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();
        let styled_symbol = match self.0 {
            None => symbol.with(Color::DarkGrey),
            Some(dirs) if dirs.count() == 1 => symbol.with(Color::Yellow),
            Some(_) => symbol.with(Color::White),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                1,
                "Each cell glyph must occupy exactly one character width."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
