use super::Coord;

/// Dense row-major storage of `width * height` slots, addressed by `(x, y)`.
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u16, height: u16, slot: T) -> Self {
        let data = vec![slot; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` for every coordinate in row-major order.
    pub fn from_fn(width: u16, height: u16, mut f: impl FnMut(Coord) -> T) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(&mut f)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub fn unravel_index(&self, index: usize) -> Coord {
        let width = self.width as usize;
        ((index % width) as u16, (index / width) as u16)
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.is_in_bounds(coord) {
            self.data.get(self.ravel_index(coord))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        if self.is_in_bounds(coord) {
            let idx = self.ravel_index(coord);
            self.data.get_mut(idx)
        } else {
            None
        }
    }

    /// Slots by raw arena index.
    pub fn slots(&self) -> &[T] {
        &self.data
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 3, false);
        grid[(4, 2)] = true;
        assert!(grid[(4, 2)]);
        assert_eq!(grid.ravel_index((4, 2)), 14);
        assert_eq!(grid.unravel_index(14), (4, 2));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::from_fn(5, 5, |(x, y)| x + y);
        assert_eq!(grid.get((5, 0)), None);
        assert_eq!(grid.get((0, 5)), None);
        assert_eq!(grid.get((4, 4)), Some(&8));
    }
}
