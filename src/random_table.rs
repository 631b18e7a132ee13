//! Seeded random preference tables for demos, property tests and benchmarks.
//!
//! Every preference list is a uniformly random permutation of the opposite side.
//! Same seed ⇒ same sequence of tables.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::Engine;
use crate::error::ValidationError;
use crate::table::PreferenceTable;
use crate::types::Agent;

/// Configuration for [`TableGenerator`].
#[derive(Clone, Debug)]
pub struct RandomTableConfig {
    /// RNG seed. Same seed ⇒ same tables.
    pub seed: u64,
    /// Agents per side.
    pub size: usize,
}

impl Default for RandomTableConfig {
    fn default() -> Self {
        Self { seed: 0, size: 5 }
    }
}

/// Deterministic table source. Each call advances the RNG.
pub struct TableGenerator {
    rng: StdRng,
    config: RandomTableConfig,
}

impl TableGenerator {
    pub fn new(config: RandomTableConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Random table with agents `0..size` ranking symbols `0..size`.
    ///
    /// # Panics
    ///
    /// If the configured size is 0 (an empty table is invalid).
    pub fn table(&mut self) -> PreferenceTable<usize, usize> {
        let symbols: Vec<usize> = (0..self.config.size).collect();
        match self.table_with_symbols(&symbols, &symbols) {
            Ok(t) => t,
            Err(e) => panic!("random table of size {}: {}", self.config.size, e),
        }
    }

    /// Random table over explicit symbol sets: one row per key, each a shuffle of `values`.
    ///
    /// The configured size is ignored; the table has `keys.len()` agents, and validation fails
    /// unless `values` has the same length and no repeats.
    pub fn table_with_symbols<K: Agent, V: Agent>(
        &mut self,
        keys: &[K],
        values: &[V],
    ) -> Result<PreferenceTable<K, V>, ValidationError> {
        let rows: Vec<(K, Vec<V>)> = keys
            .iter()
            .map(|k| {
                let mut prefs = values.to_vec();
                prefs.shuffle(&mut self.rng);
                (k.clone(), prefs)
            })
            .collect();
        PreferenceTable::new(rows)
    }

    /// Engine over two independently drawn tables (proposers first).
    pub fn engine(&mut self) -> Engine<usize, usize> {
        let proposers = self.table();
        let acceptors = self.table();
        match Engine::new(proposers, acceptors) {
            Ok(e) => e,
            Err(e) => panic!("random tables over 0..{} must cross-validate: {}", self.config.size, e),
        }
    }

    /// Returns `n` engines. Advances the generator state.
    pub fn take_engines(&mut self, n: usize) -> Vec<Engine<usize, usize>> {
        (0..n).map(|_| self.engine()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_tables() {
        let c = RandomTableConfig { seed: 42, size: 8 };
        let t1 = TableGenerator::new(c.clone()).table();
        let t2 = TableGenerator::new(c).table();
        assert_eq!(t1, t2);
    }

    #[test]
    fn different_seed_different_tables() {
        let t1 = TableGenerator::new(RandomTableConfig { seed: 1, size: 10 }).table();
        let t2 = TableGenerator::new(RandomTableConfig { seed: 2, size: 10 }).table();
        assert_ne!(t1, t2, "different seeds should produce different preferences");
    }

    #[test]
    fn rows_are_permutations() {
        let t = TableGenerator::new(RandomTableConfig { seed: 7, size: 6 }).table();
        assert_eq!(t.len(), 6);
        for (_, prefs) in t.iter() {
            let mut sorted = prefs.to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..6).collect::<Vec<_>>());
        }
    }

    #[test]
    fn explicit_symbols() {
        let mut g = TableGenerator::new(RandomTableConfig::default());
        let t = g.table_with_symbols(&["A", "B", "C"], &["a", "b", "c"]).unwrap();
        assert_eq!(t.agents(), &["A", "B", "C"]);
        assert!(t.symbols().contains(&"b"));
    }

    #[test]
    fn explicit_symbols_wrong_length_rejected() {
        let mut g = TableGenerator::new(RandomTableConfig::default());
        let err = g.table_with_symbols(&["A", "B"], &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, ValidationError::DimensionMismatch { .. }));
    }

    #[test]
    fn generated_engines_solve_stably() {
        let mut g = TableGenerator::new(RandomTableConfig { seed: 3, size: 12 });
        for engine in g.take_engines(5) {
            let m = engine.solve();
            assert!(engine.is_complete(&m));
            assert!(engine.is_stable(&m));
        }
    }
}
