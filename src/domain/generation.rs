use std::collections::{HashMap, HashSet};

use metrohash::MetroBuildHasher;
use rayon::prelude::*;

use super::{Cell, rules::Rule};

/// Live cells handed to one rayon task when tallying in parallel.
const PAR_CHUNK: usize = 1024;

/// Generation is the complete set of live cells at one simulation instant.
///
/// The grid is unbounded: only live coordinates are stored, and candidates
/// for the next generation are enumerated from the neighborhoods of live
/// cells alone. A coordinate with zero live neighbors can never be born, so
/// the per-step cost is proportional to the live population rather than to
/// any bounding box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Cell, MetroBuildHasher>,
}

impl Generation {
    /// Create an empty generation
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a generation from live-cell coordinates (duplicates collapse)
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Scatter ~30% live cells over a width×height region centered on the
    /// origin.
    pub fn randomized(width: i64, height: i64) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();

        let mut cells: HashSet<Cell, MetroBuildHasher> = HashSet::default();
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(0.3) {
                    cells.insert(Cell::new(x - width / 2, y - height / 2));
                }
            }
        }
        Self { cells }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Flip one coordinate: live becomes dead, dead becomes live.
    /// Returns true when the cell is live after the flip.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Iterate over all live cells (unordered)
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Count live neighbors of every candidate coordinate. Candidates are
    /// exactly the cells adjacent to at least one live cell; a live cell
    /// that appears nowhere in the tally has zero live neighbors and dies
    /// regardless, so nothing else needs to be visited.
    fn neighbor_tally(&self) -> HashMap<Cell, u8, MetroBuildHasher> {
        let mut tally: HashMap<Cell, u8, MetroBuildHasher> =
            HashMap::with_capacity_and_hasher(self.cells.len() * 4, MetroBuildHasher::default());
        for cell in &self.cells {
            for neighbor in cell.neighbors() {
                *tally.entry(neighbor).or_insert(0) += 1;
            }
        }
        tally
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let next = self
            .neighbor_tally()
            .into_iter()
            .filter(|&(cell, count)| rule.alive_next(self.contains(cell), count))
            .map(|(cell, _)| cell)
            .collect();

        Self { cells: next }
    }

    /// Parallel evolution using rayon for large live sets.
    /// The tally is built per chunk of live cells and merged, then the
    /// candidates are filtered in parallel.
    pub fn evolve_parallel(&self, rule: &dyn Rule) -> Self {
        let live: Vec<Cell> = self.cells.iter().copied().collect();

        let tally = live
            .par_chunks(PAR_CHUNK)
            .map(|chunk| {
                let mut local: HashMap<Cell, u8, MetroBuildHasher> = HashMap::default();
                for cell in chunk {
                    for neighbor in cell.neighbors() {
                        *local.entry(neighbor).or_insert(0) += 1;
                    }
                }
                local
            })
            .reduce(HashMap::default, |mut merged, local| {
                for (cell, count) in local {
                    *merged.entry(cell).or_insert(0) += count;
                }
                merged
            });

        let candidates: Vec<(Cell, u8)> = tally.into_iter().collect();
        let next: Vec<Cell> = candidates
            .into_par_iter()
            .filter(|&(cell, count)| rule.alive_next(self.contains(cell), count))
            .map(|(cell, _)| cell)
            .collect();

        Self::from_cells(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConwayRule;

    fn cells(coords: &[(i64, i64)]) -> Generation {
        Generation::from_cells(coords.iter().map(|&(x, y)| Cell::new(x, y)))
    }

    #[test]
    fn test_block_is_still_life() {
        let block = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let mut generation = block.clone();
        for _ in 0..5 {
            generation = generation.evolve(&ConwayRule);
            assert_eq!(generation, block);
        }
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = cells(&[(0, 1), (1, 1), (2, 1)]);
        let vertical = cells(&[(1, 0), (1, 1), (1, 2)]);

        let after_one = horizontal.evolve(&ConwayRule);
        assert_eq!(after_one, vertical);

        let after_two = after_one.evolve(&ConwayRule);
        assert_eq!(after_two, horizontal);
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let lone = cells(&[(5, 5)]);
        let next = lone.evolve(&ConwayRule);
        assert!(next.is_empty());
    }

    #[test]
    fn test_empty_generation_is_stable() {
        let empty = Generation::new();
        assert!(empty.evolve(&ConwayRule).is_empty());
    }

    #[test]
    fn test_birth_completes_the_corner() {
        // L of three cells: the empty corner (1, 1) has exactly 3 live
        // neighbors and must be born, closing the shape into a block.
        let l_shape = cells(&[(0, 0), (1, 0), (0, 1)]);
        let next = l_shape.evolve(&ConwayRule);
        assert_eq!(next, cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_toggle_twice_restores_generation() {
        let original = cells(&[(0, 0), (3, -2)]);

        for &(x, y) in &[(0, 0), (7, 7), (-3, 4)] {
            let mut generation = original.clone();
            let first = generation.toggle(Cell::new(x, y));
            let second = generation.toggle(Cell::new(x, y));
            assert_ne!(first, second);
            assert_eq!(generation, original);
        }
    }

    #[test]
    fn test_from_cells_collapses_duplicates() {
        let generation = cells(&[(1, 1), (1, 1), (2, 2)]);
        assert_eq!(generation.len(), 2);
    }

    #[test]
    fn test_parallel_agrees_with_serial() {
        // Acorn grows a large, irregular working set from 7 cells.
        let mut serial = cells(&[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)]);
        let mut parallel = serial.clone();

        for _ in 0..20 {
            serial = serial.evolve(&ConwayRule);
            parallel = parallel.evolve_parallel(&ConwayRule);
            assert_eq!(serial, parallel);
        }
        assert!(!serial.is_empty());
    }

    #[test]
    fn test_randomized_stays_within_region() {
        let generation = Generation::randomized(20, 10);
        for cell in generation.iter() {
            assert!(cell.x >= -10 && cell.x < 10);
            assert!(cell.y >= -5 && cell.y < 5);
        }
    }
}
