mod evolution_engine;
mod evolver;

pub use evolution_engine::EvolutionEngine;
pub use evolver::PopulationEvolver;

use crate::Population;

/// Notifications published while a run progresses.
#[derive(Debug, Clone, PartialEq)]
pub enum EventType {
    /// One generation transition has fully materialized.
    EpochCompleted,
    /// The run produced its final population.
    RunCompleted,
}

/// Last fully materialized state of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<G> {
    pub generation: u64,
    pub population: Population<G>,
}

impl<G> Default for Snapshot<G> {
    fn default() -> Self {
        Self {
            generation: Default::default(),
            population: Default::default(),
        }
    }
}
