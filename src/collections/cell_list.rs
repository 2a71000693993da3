use rand::Rng;

use crate::maze::Coord;

/// An ordered run of cells, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct CellList {
    cells: Vec<Coord>,
}

impl CellList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coord: Coord) {
        self.cells.push(coord);
    }

    pub fn pop(&mut self) -> Option<Coord> {
        self.cells.pop()
    }

    /// Removes the entry at `position`, closing the gap between its neighbours.
    pub fn remove(&mut self, position: usize) -> Option<Coord> {
        (position < self.cells.len()).then(|| self.cells.remove(position))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Uniformly picks one entry.
    pub fn pick_random(&self, rng: &mut impl Rng) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        Some(self.cells[rng.random_range(0..self.cells.len())])
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}
