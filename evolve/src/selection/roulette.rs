use common::random::RngWrapper;

use crate::{
    error::{EvolutionError, EvolutionResult},
    Chromosome, Population,
};

use super::Selector;

/// Fitness-proportional selection.
///
/// Draws a fraction `u`, targets `u * total_fitness`, then walks the
/// population accumulating fitness and returns the first chromosome
/// whose running sum reaches the target. A zero-fitness chromosome is
/// still reachable when the target lands exactly on its boundary.
pub struct RouletteSelector<R> {
    rng: R,
}

impl<R> RouletteSelector<R>
where
    R: RngWrapper,
{
    pub fn new(rng: R) -> Self {
        RouletteSelector { rng }
    }
}

impl<G, R> Selector<G> for RouletteSelector<R>
where
    R: RngWrapper,
{
    fn choose<'a>(
        &mut self,
        population: &'a Population<G>,
        total_fitness: f32,
    ) -> EvolutionResult<&'a Chromosome<G>> {
        if population.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "population",
                "must not be empty",
            ));
        }

        let target = self.rng.gen_fraction() * total_fitness;
        let mut cumulative = 0f32;
        for chromosome in population.iter() {
            cumulative += chromosome.fitness;
            if cumulative >= target {
                return Ok(chromosome);
            }
        }

        Err(EvolutionError::invalid_argument(
            "total_fitness",
            format!(
                "{} exceeds the population fitness sum {}",
                total_fitness, cumulative
            ),
        ))
    }
}
