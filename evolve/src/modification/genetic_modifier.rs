use std::mem;

use common::random::RngWrapper;
use validator::Validate;

use crate::{
    error::{EvolutionError, EvolutionResult},
    Chromosome,
};

use super::{Modifier, ModifierConfig, MutationStrategy};

/// Rate-driven mutation and multi-point crossover.
///
/// Crossover draws its cut points unsorted, sorts them, then swaps the
/// alternating segments between consecutive points; an odd point count
/// leaves the final swapped segment running to the end of the genes.
pub struct GeneticModifier<G, R> {
    config: ModifierConfig,
    strategy: MutationStrategy<G>,
    rng: R,
}

impl<G, R> GeneticModifier<G, R>
where
    R: RngWrapper,
{
    /// Fails with `OutOfRange` when a configured rate leaves [0, 1].
    pub fn new(
        config: ModifierConfig,
        strategy: MutationStrategy<G>,
        rng: R,
    ) -> EvolutionResult<Self> {
        config.validate()?;
        Ok(GeneticModifier {
            config,
            strategy,
            rng,
        })
    }
}

impl<G, R> Modifier<G> for GeneticModifier<G, R>
where
    R: RngWrapper,
{
    fn mutate(&mut self, chromosome: &mut Chromosome<G>) -> EvolutionResult<()> {
        if chromosome.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "chromosome",
                "must hold at least one gene",
            ));
        }

        let length = chromosome.len();
        for index in 0..length {
            if self.rng.gen_fraction() >= self.config.mutation_rate {
                continue;
            }
            match &mut self.strategy {
                MutationStrategy::Adjacent => chromosome.genes.swap(index, (index + 1) % length),
                MutationStrategy::Random => {
                    let other = self.rng.gen_index(length);
                    chromosome.genes.swap(index, other);
                }
                MutationStrategy::Custom(mutation) => mutation(chromosome, index),
            }
        }
        Ok(())
    }

    fn crossover(
        &mut self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
    ) -> EvolutionResult<()> {
        if first.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "first",
                "must hold at least one gene",
            ));
        }
        if second.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "second",
                "must hold at least one gene",
            ));
        }
        let length = first.len();
        if second.len() != length {
            return Err(EvolutionError::invalid_argument(
                "second",
                format!("holds {} genes where {} are expected", second.len(), length),
            ));
        }

        if self.rng.gen_fraction() >= self.config.crossover_rate {
            return Ok(());
        }

        let mut points: Vec<usize> = (0..self.config.crossover_points)
            .map(|_| self.rng.gen_index(length))
            .collect();
        points.sort_unstable();

        for pair in points.chunks(2) {
            let start = pair[0];
            let end = pair.get(1).copied().unwrap_or(length);
            for index in start..end {
                mem::swap(&mut first.genes[index], &mut second.genes[index]);
            }
        }
        Ok(())
    }
}
