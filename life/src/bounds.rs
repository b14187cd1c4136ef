use crate::grid::{Cell, CellSet};

/// Inclusive axis-aligned rectangle of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Smallest box covering every live cell, or `None` for an empty set.
    pub fn tight(cells: &CellSet) -> Option<Self> {
        let mut iter = cells.iter();
        let first = *iter.next()?;
        let start = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(iter.fold(start, |bbox, cell| BoundingBox {
            min_x: bbox.min_x.min(cell.x),
            min_y: bbox.min_y.min(cell.y),
            max_x: bbox.max_x.max(cell.x),
            max_y: bbox.max_y.max(cell.y),
        }))
    }

    /// The tight box grown by one cell on every side, which is every cell that
    /// can be alive in the next generation.
    pub fn padded(cells: &CellSet) -> Option<Self> {
        Self::tight(cells).map(|bbox| bbox.expand(1))
    }

    /// Grows the box by `by` cells per side, saturating at the edges of the plane.
    pub fn expand(self, by: i32) -> Self {
        BoundingBox {
            min_x: self.min_x.saturating_sub(by),
            min_y: self.min_y.saturating_sub(by),
            max_x: self.max_x.saturating_add(by),
            max_y: self.max_y.saturating_add(by),
        }
    }

    pub fn width(&self) -> u64 {
        (self.max_x as i64 - self.min_x as i64 + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (self.max_y as i64 - self.min_y as i64 + 1) as u64
    }

    /// Number of cells in the box. A box spanning the whole plane saturates at `u64::MAX`.
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_x..=self.max_x).contains(&cell.x) && (self.min_y..=self.max_y).contains(&cell.y)
    }

    /// Every cell in the box, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.min_y..=self.max_y).flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Cell::new(x, y)))
    }
}
