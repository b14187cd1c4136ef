use std::time::Duration;

use crate::bounds::BoundingBox;
use crate::generation::advance;
use crate::grid::{Cell, CellSet};
use crate::rle;

pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the current generation and decides when to advance it.
///
/// The live cells are never mutated by advancing: each step computes a new
/// set and swaps it in, dropping the previous one.
#[derive(Debug)]
pub struct Simulation {
    cells: CellSet,
    generation: u64,
    running: bool,
    step_interval: Duration,
    accumulator: Duration,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Simulation {
            cells: CellSet::new(),
            generation: 0,
            running: false,
            step_interval: DEFAULT_STEP_INTERVAL,
            accumulator: Duration::ZERO,
        }
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one generation unconditionally.
    pub fn step(&mut self) {
        self.cells = advance(&self.cells);
        self.generation += 1;
        log::trace!("generation {}: {} cells", self.generation, self.cells.len());
    }

    /// Starts or stops auto-advancing. Starting primes the timer so the very
    /// next tick advances.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        self.accumulator = self.step_interval;
    }

    /// Feed elapsed wall time. Returns whether a generation was advanced.
    ///
    /// An empty board is never advanced, but time stays accumulated so that the
    /// first edit is picked up on the next tick.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }
        if self.accumulator < self.step_interval {
            self.accumulator += elapsed;
            return false;
        }
        if self.cells.is_empty() {
            return false;
        }
        self.accumulator = Duration::ZERO;
        self.step();
        true
    }

    /// Flips a single cell and returns its new state (`true` = alive).
    pub fn toggle_cell(&mut self, cell: Cell) -> bool {
        self.cells.toggle(cell)
    }

    /// Replaces the board with a decoded pattern.
    pub fn load_pattern(&mut self, pattern: &str) {
        self.replace(rle::parse(pattern));
        log::debug!("loaded pattern with {} cells", self.cells.len());
    }

    /// Replaces the board with a coin-flip soup over `region`.
    pub fn randomize(&mut self, region: BoundingBox) {
        let mut cells = CellSet::new();
        cells.randomize_default(region);
        self.replace(cells);
        log::debug!("randomized {}x{} region, {} cells alive", region.width(), region.height(), self.cells.len());
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        log::debug!("cleared board");
    }

    fn replace(&mut self, cells: CellSet) {
        self.cells = cells;
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);
    const FRAME: Duration = Duration::from_millis(40);

    #[test]
    fn test_step_counts_generations() {
        let mut sim = Simulation::new();
        sim.load_pattern("3o!");
        assert_eq!(sim.generation(), 0);

        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.cells(), &rle::parse("3o!"));
    }

    #[test]
    fn test_load_pattern_resets() {
        let mut sim = Simulation::new();
        sim.load_pattern("2o$2o!");
        sim.step();
        sim.load_pattern("o!");
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 1);
    }

    #[test]
    fn test_toggle_cell_pairs() {
        let mut sim = Simulation::new();
        assert!(sim.toggle_cell(Cell::new(2, 2)));
        assert!(!sim.toggle_cell(Cell::new(2, 2)));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut sim = Simulation::new().with_step_interval(STEP);
        sim.load_pattern("3o!");
        assert!(!sim.tick(Duration::from_secs(10)));
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_first_tick_after_start_advances() {
        let mut sim = Simulation::new().with_step_interval(STEP);
        sim.load_pattern("3o!");
        sim.toggle_running();
        assert!(sim.is_running());
        assert!(sim.tick(FRAME));
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut sim = Simulation::new().with_step_interval(STEP);
        sim.load_pattern("3o!");
        sim.toggle_running();
        assert!(sim.tick(FRAME));

        // 0 -> 40 -> 80 -> 120ms, then the following tick fires
        assert!(!sim.tick(FRAME));
        assert!(!sim.tick(FRAME));
        assert!(!sim.tick(FRAME));
        assert!(sim.tick(FRAME));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_empty_board_is_not_advanced() {
        let mut sim = Simulation::new().with_step_interval(STEP);
        sim.toggle_running();
        assert!(!sim.tick(FRAME));
        assert_eq!(sim.generation(), 0);

        sim.toggle_cell(Cell::new(0, 0));
        assert!(sim.tick(FRAME));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_randomize_and_clear() {
        let region = BoundingBox { min_x: 0, min_y: 0, max_x: 15, max_y: 15 };
        let mut sim = Simulation::new();
        sim.step();
        sim.randomize(region);
        assert_eq!(sim.generation(), 0);
        assert!(sim.cells().iter().all(|&c| region.contains(c)));

        sim.clear();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
    }
}
