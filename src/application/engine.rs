use crate::domain::{Cell, Generation, Rule, default_rule};

/// Live-set size above which the parallel step pays for its overhead
const PARALLEL_THRESHOLD: usize = 10_000;

/// SimulationEngine owns the authoritative live-cell set and computes
/// successive generations on demand. It is the single owner of the
/// generation; everything outside receives snapshots, never a handle that
/// could mutate the live set directly.
pub struct SimulationEngine {
    generation: Generation,
    rule: Box<dyn Rule>,
    generations: u64,
}

impl SimulationEngine {
    /// Create an engine seeded with an initial generation under B3/S23
    pub fn new(seed: Generation) -> Self {
        Self::with_rule(seed, default_rule())
    }

    /// Create an engine with a custom rule
    pub fn with_rule(seed: Generation, rule: Box<dyn Rule>) -> Self {
        Self {
            generation: seed,
            rule,
            generations: 0,
        }
    }

    /// Advance by one generation, replacing the live set wholesale.
    /// Always succeeds; extinction (the empty set) is a valid fixed point,
    /// not an error.
    pub fn step(&mut self) -> &Generation {
        self.generation = if self.generation.len() >= PARALLEL_THRESHOLD {
            self.generation.evolve_parallel(self.rule.as_ref())
        } else {
            self.generation.evolve(self.rule.as_ref())
        };
        self.generations += 1;
        &self.generation
    }

    /// Flip one coordinate's liveness
    pub fn toggle(&mut self, cell: Cell) -> &Generation {
        self.generation.toggle(cell);
        &self.generation
    }

    /// Replace the live set wholesale and restart the generation counter
    pub fn reseed(&mut self, seed: Generation) -> &Generation {
        self.generation = seed;
        self.generations = 0;
        &self.generation
    }

    /// Read-only copy of the current live set
    pub fn snapshot(&self) -> Generation {
        self.generation.clone()
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Number of steps taken since the last (re)seed
    pub const fn generations(&self) -> u64 {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    /// Rule under which nothing ever lives; exercises the rule seam.
    struct ExtinctionRule;

    impl Rule for ExtinctionRule {
        fn name(&self) -> &'static str {
            "Extinction"
        }

        fn description(&self) -> &'static str {
            "Everything dies"
        }

        fn alive_next(&self, _alive: bool, _neighbors: u8) -> bool {
            false
        }
    }

    #[test]
    fn test_step_replaces_generation_and_counts() {
        let mut engine = SimulationEngine::new(presets::blinker().as_generation());

        assert_eq!(engine.generations(), 0);
        let first = engine.step().clone();
        assert_eq!(engine.generations(), 1);
        assert_ne!(first, presets::blinker().as_generation());

        let second = engine.step().clone();
        assert_eq!(engine.generations(), 2);
        assert_eq!(second, presets::blinker().as_generation());
    }

    #[test]
    fn test_toggle_inserts_and_removes() {
        let mut engine = SimulationEngine::new(Generation::new());
        let cell = Cell::new(4, -4);

        assert!(engine.toggle(cell).contains(cell));
        assert!(!engine.toggle(cell).contains(cell));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut engine = SimulationEngine::new(presets::block().as_generation());
        let snapshot = engine.snapshot();

        engine.toggle(Cell::new(50, 50));
        assert_eq!(snapshot.len(), 4);
        assert!(!snapshot.contains(Cell::new(50, 50)));
    }

    #[test]
    fn test_reseed_resets_counter() {
        let mut engine = SimulationEngine::new(presets::blinker().as_generation());
        engine.step();
        engine.step();

        let reseeded = engine.reseed(Generation::new()).clone();
        assert!(reseeded.is_empty());
        assert_eq!(engine.generations(), 0);
    }

    #[test]
    fn test_custom_rule_drives_step() {
        let mut engine =
            SimulationEngine::with_rule(presets::block().as_generation(), Box::new(ExtinctionRule));
        assert!(engine.step().is_empty());
    }

    #[test]
    fn test_extinction_is_stable() {
        let mut engine = SimulationEngine::new(Generation::from_cells([Cell::new(5, 5)]));
        assert!(engine.step().is_empty());
        assert!(engine.step().is_empty());
    }
}
