use std::collections::hash_set;
use std::collections::HashSet;

use rand::Rng;

use crate::bounds::BoundingBox;

/// A coordinate on the unbounded grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Returns the cell at `(x + dx, y + dy)`, or `None` if it falls off the `i32` plane.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Cell> {
        Some(Cell {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

/// The set of live cells. Anything not in the set is dead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Marks `cell` alive. Returns `false` if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Marks `cell` dead. Returns whether it was alive; removing a dead cell is a no-op.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Flips `cell` and returns its new state (`true` = alive).
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.remove(cell) {
            false
        } else {
            self.insert(cell)
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Replaces the contents with a random soup covering `region`, where each
    /// cell is alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, region: BoundingBox, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        self.cells.clear();
        for cell in region.cells() {
            if rng.random_bool(density) {
                self.cells.insert(cell);
            }
        }
    }

    /// Coin-flip soup using the thread-local RNG.
    pub fn randomize_default(&mut self, region: BoundingBox) {
        let mut rng = rand::rng();
        self.randomize(region, 0.5, &mut rng);
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        CellSet {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
