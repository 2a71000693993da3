pub mod cell;
mod direction;
pub mod grid;

use std::collections::VecDeque;

pub use cell::{Cell, CellGlyph};
pub use direction::{Direction, Directions};
use grid::Grid;

/// `(x, y)` position in the maze. `x` grows east, `y` grows south.
pub type Coord = (u16, u16);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("cannot create a maze with dimensions {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
}

/// A rectangular grid graph: every slot holds a cell or has been removed, and
/// cells are joined by undirected edges to their cardinal neighbours.
pub struct Maze {
    cells: Grid<Option<Cell>>,
    live_cells: usize,
}

impl Maze {
    /// Creates a new maze with every cell present and no links.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let cells = Grid::from_fn(width, height, |coord| Some(Cell::new(coord)));
        let live_cells = cells.len();
        Ok(Maze { cells, live_cells })
    }

    /// Creates a new maze with every pair of adjacent cells linked.
    pub fn new_linked(width: u16, height: u16) -> Result<Self, MazeError> {
        let mut maze = Maze::new(width, height)?;
        maze.link_all_adjacent();
        Ok(maze)
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.cells.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.cells.height()
    }

    /// Number of cells that have not been removed.
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    /// Checks whether no cell has been removed.
    pub fn is_full(&self) -> bool {
        self.live_cells == self.cells.len()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.cells.is_in_bounds(coord)
    }

    /// Arena index of the live cell at `coord`.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.cell_at(coord).map(|_| self.cells.ravel_index(coord))
    }

    /// Coordinate of the slot with the given arena index.
    pub fn coord_of(&self, index: usize) -> Coord {
        self.cells.unravel_index(index)
    }

    /// Returns the cell at `coord`, or `None` if out of bounds or removed.
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord).and_then(Option::as_ref)
    }

    fn cell_at_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord).and_then(Option::as_mut)
    }

    /// Returns the live cell one step from `coord` in `direction`, by grid
    /// position rather than by edges.
    pub fn adjacent(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.cell_at(coord)?;
        let next = direction.offset(coord, self.width(), self.height())?;
        self.cell_at(next).map(Cell::coord)
    }

    /// Live grid neighbours of `coord`, one slot per direction.
    pub fn neighbours(&self, coord: Coord) -> [Option<Coord>; 4] {
        Direction::ALL.map(|dir| self.adjacent(coord, dir))
    }

    /// Returns the cell linked to `coord` in `direction`.
    pub fn linked_neighbour(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.cell_at(coord)?
            .link(direction)
            .map(|idx| self.coord_of(idx))
    }

    /// Checks whether `a` and `b` share an edge.
    pub fn is_linked(&self, a: Coord, b: Coord) -> bool {
        match direction_between(a, b) {
            Some(dir) => self.linked_neighbour(a, dir) == Some(b),
            None => false,
        }
    }

    /// Links two grid-adjacent cells.
    ///
    /// # Returns
    /// `true` if the cells are now linked, `false` if they are not adjacent,
    /// identical, out of bounds, or removed.
    pub fn link(&mut self, a: Coord, b: Coord) -> bool {
        match direction_between(a, b) {
            Some(dir) => self.link_in_direction(a, dir),
            None => false,
        }
    }

    /// Links `coord` to its grid neighbour in `direction`, if there is one.
    /// Both edge slots are always set together.
    pub fn link_in_direction(&mut self, coord: Coord, direction: Direction) -> bool {
        let Some(neighbour) = self.adjacent(coord, direction) else {
            return false;
        };
        let from_idx = self.cells.ravel_index(coord);
        let to_idx = self.cells.ravel_index(neighbour);
        if let Some(cell) = self.cell_at_mut(coord) {
            cell.set_link(direction, Some(to_idx));
        }
        if let Some(cell) = self.cell_at_mut(neighbour) {
            cell.set_link(direction.opposite(), Some(from_idx));
        }
        true
    }

    /// Removes the edge between two cells.
    ///
    /// # Returns
    /// `true` if an edge was removed, `false` if there was none.
    pub fn unlink(&mut self, a: Coord, b: Coord) -> bool {
        match direction_between(a, b) {
            Some(dir) if self.linked_neighbour(a, dir) == Some(b) => {
                self.unlink_in_direction(a, dir)
            }
            _ => false,
        }
    }

    /// Removes the edge leaving `coord` in `direction`, clearing both slots.
    pub fn unlink_in_direction(&mut self, coord: Coord, direction: Direction) -> bool {
        let Some(neighbour) = self.linked_neighbour(coord, direction) else {
            return false;
        };
        if let Some(cell) = self.cell_at_mut(coord) {
            cell.set_link(direction, None);
        }
        if let Some(cell) = self.cell_at_mut(neighbour) {
            cell.set_link(direction.opposite(), None);
        }
        true
    }

    /// Links every pair of adjacent live cells.
    pub fn link_all_adjacent(&mut self) {
        for coord in self.coords().collect::<Vec<_>>() {
            self.link_in_direction(coord, Direction::East);
            self.link_in_direction(coord, Direction::South);
        }
    }

    /// Clears every edge in the maze.
    pub fn unlink_all(&mut self) {
        self.cells.slots_mut().iter_mut().flatten().for_each(|cell| {
            Direction::ALL
                .iter()
                .for_each(|&dir| cell.set_link(dir, None));
        });
    }

    /// Removes the cell at `coord`, unlinking it from all its neighbours first.
    ///
    /// # Returns
    /// `true` if a live cell was removed.
    pub fn remove_cell(&mut self, coord: Coord) -> bool {
        if self.cell_at(coord).is_none() {
            return false;
        }
        for dir in Direction::ALL {
            self.unlink_in_direction(coord, dir);
        }
        self.cells[coord] = None;
        self.live_cells -= 1;
        true
    }

    /// Directions in which `coord` has an edge. A missing cell has none.
    pub fn unblocked_directions(&self, coord: Coord) -> Directions {
        self.cell_at(coord)
            .map(Cell::unblocked_directions)
            .unwrap_or_default()
    }

    /// Directions in which `coord` has no edge, i.e. where a wall stands.
    pub fn blocked_directions(&self, coord: Coord) -> Directions {
        self.unblocked_directions(coord).inverted()
    }

    /// Coordinates of all live cells in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.slots().iter().flatten().map(Cell::coord)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.cells
            .slots()
            .iter()
            .flatten()
            .map(Cell::link_count)
            .sum::<usize>()
            / 2
    }

    /// Checks that every live cell can reach every other by grid adjacency,
    /// ignoring edges. Generators that build a spanning tree need this.
    pub fn is_grid_connected(&self) -> bool {
        let Some(start) = self.coords().next() else {
            return true;
        };
        let mut seen = Grid::new(self.width(), self.height(), false);
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut reached = 1;
        while let Some(coord) = queue.pop_front() {
            for next in self.neighbours(coord).into_iter().flatten() {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == self.live_cells
    }

    /// Checks the edge invariant: every edge is mirrored by its neighbour and
    /// only joins adjacent live cells.
    pub fn is_symmetric(&self) -> bool {
        self.cells.slots().iter().flatten().all(|cell| {
            Direction::ALL.iter().all(|&dir| match cell.link(dir) {
                None => true,
                Some(idx) => {
                    let target = self.coord_of(idx);
                    self.adjacent(cell.coord(), dir) == Some(target)
                        && self.linked_neighbour(target, dir.opposite()) == Some(cell.coord())
                }
            })
        })
    }
}

/// Direction leading from `a` to `b` when they are grid-adjacent.
fn direction_between(a: Coord, b: Coord) -> Option<Direction> {
    let dx = b.0 as i32 - a.0 as i32;
    let dy = b.1 as i32 - a.1 as i32;
    match (dx, dy) {
        (0, -1) => Some(Direction::North),
        (1, 0) => Some(Direction::East),
        (0, 1) => Some(Direction::South),
        (-1, 0) => Some(Direction::West),
        _ => None,
    }
}
