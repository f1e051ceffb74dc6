use std::cmp::Ordering;

use crate::{
    error::{EvolutionError, EvolutionResult},
    modification::Modifier,
    selection::Selector,
    validation::Validator,
    Chromosome, Population,
};

/// One generational step.
///
/// Promotes elites, then selects parent pairs, clones them, crosses,
/// mutates and validity-filters the offspring until the next population
/// reaches exactly the current size. Invalid and surplus offspring are
/// discarded silently and replacements drawn.
pub struct PopulationEvolver<G> {
    selector: Box<dyn Selector<G>>,
    modifier: Box<dyn Modifier<G>>,
    validator: Box<dyn Validator<G>>,
}

impl<G> PopulationEvolver<G>
where
    G: Clone,
{
    pub fn new(
        selector: Box<dyn Selector<G>>,
        modifier: Box<dyn Modifier<G>>,
        validator: Box<dyn Validator<G>>,
    ) -> Self {
        PopulationEvolver {
            selector,
            modifier,
            validator,
        }
    }

    /// Population indexes ranked by descending fitness, stable on ties.
    fn rank_indexes(population: &Population<G>) -> Vec<usize> {
        let mut indexes: Vec<usize> = (0..population.len()).collect();
        indexes.sort_by(|&a, &b| {
            population.chromosomes[b]
                .fitness
                .partial_cmp(&population.chromosomes[a].fitness)
                .unwrap_or(Ordering::Equal)
        });
        indexes
    }

    /// Produces the next generation from `population`.
    ///
    /// `number_of_elites` is clamped to the population size; promoted
    /// elites are independent clones carrying their already computed
    /// fitness. Selection draws reuse the fitness sum of the unmodified
    /// input population.
    pub fn evolve(
        &mut self,
        population: &Population<G>,
        number_of_elites: usize,
    ) -> EvolutionResult<Population<G>> {
        if population.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "population",
                "must not be empty",
            ));
        }

        let size = population.len();
        let elite_count = number_of_elites.min(size);
        let mut next = Population::with_capacity(size);
        for &index in Self::rank_indexes(population).iter().take(elite_count) {
            next.push(population.chromosomes[index].clone());
        }

        let total_fitness = population.total_fitness();
        while next.len() < size {
            let dad = self.selector.choose(population, total_fitness)?;
            let mom = self.selector.choose(population, total_fitness)?;
            let mut first = Chromosome::new(dad.genes.clone());
            let mut second = Chromosome::new(mom.genes.clone());

            self.modifier.crossover(&mut first, &mut second)?;
            self.modifier.mutate(&mut first)?;
            self.modifier.mutate(&mut second)?;

            for child in [first, second] {
                if next.len() < size && self.validator.is_valid(&child) {
                    next.push(child);
                }
            }
        }
        Ok(next)
    }
}
