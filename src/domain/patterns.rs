use super::{Cell, Generation};

/// Represents a pattern that can be stamped onto a generation
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(i64, i64)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self {
            name,
            description,
            cells,
        }
    }

    /// Place pattern on a generation with its origin at (x, y)
    pub fn place_on(&self, generation: &mut Generation, x: i64, y: i64) {
        for &(dx, dy) in &self.cells {
            generation.insert(Cell::new(x + dx, y + dy));
        }
    }

    /// The pattern as a standalone generation at the origin
    pub fn as_generation(&self) -> Generation {
        let mut generation = Generation::new();
        self.place_on(&mut generation, 0, 0);
        generation
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Boot seed - two three-wide brackets facing each other
    pub fn default_seed() -> Pattern {
        Pattern::new(
            "Seed",
            "Boot pattern",
            vec![
                (0, 0), (1, 0), (2, 0),
                (0, 1),         (2, 1),
                (0, 2),         (2, 2),
                (0, 4),         (2, 4),
                (0, 5),         (2, 5),
                (0, 6), (1, 6), (2, 6),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_applies_offset() {
        let mut generation = Generation::new();
        presets::block().place_on(&mut generation, -3, 10);

        assert_eq!(generation.len(), 4);
        assert!(generation.contains(Cell::new(-3, 10)));
        assert!(generation.contains(Cell::new(-2, 11)));
    }

    #[test]
    fn test_default_seed_has_fourteen_cells() {
        assert_eq!(presets::default_seed().as_generation().len(), 14);
    }

    #[test]
    fn test_as_generation_matches_offsets() {
        let glider = presets::glider();
        let generation = glider.as_generation();
        assert_eq!(generation.len(), glider.cells.len());
        for &(x, y) in &glider.cells {
            assert!(generation.contains(Cell::new(x, y)));
        }
    }
}
