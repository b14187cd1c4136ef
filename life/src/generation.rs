use crate::bounds::BoundingBox;
use crate::grid::{Cell, CellSet};

/// Count the number of alive cells in the Moore neighborhood of `cell`.
pub fn count_alive_neighbors(cells: &CellSet, cell: Cell) -> u8 {
    let mut count = 0;

    for dy in [-1, 0, 1] {
        for dx in [-1, 0, 1] {
            if dx == 0 && dy == 0 {
                // Skip the cell itself
                continue;
            }

            // Off the edge of the plane is always dead
            if let Some(neighbor) = cell.offset(dx, dy) {
                if cells.contains(neighbor) {
                    count += 1;
                }
            }
        }
    }

    count
}

/// B3/S23: whether a cell is alive next generation.
pub fn next_state(alive: bool, alive_neighbors: u8) -> bool {
    match (alive, alive_neighbors) {
        (true, 2..=3) => true, // Survives
        (false, 3) => true,    // Becomes alive
        _ => false,            // Dies or remains dead
    }
}

/// Advance `current` by one generation.
///
/// Only the padded bounding box of `current` is scanned, since no cell further
/// out has a live neighbor. The result is a fresh set; `current` is untouched.
pub fn advance(current: &CellSet) -> CellSet {
    let mut next = CellSet::new();

    let Some(bbox) = BoundingBox::padded(current) else {
        return next;
    };

    for cell in bbox.cells() {
        let alive_neighbors = count_alive_neighbors(current, cell);
        if next_state(current.contains(cell), alive_neighbors) {
            next.insert(cell);
        }
    }

    next
}
