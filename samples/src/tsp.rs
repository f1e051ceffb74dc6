use std::f32::consts::TAU;

use anyhow::{bail, Result};
use evolve::{Chromosome, FitnessCalculator, Population};
use rand::{seq::SliceRandom, Rng};

const MIN_CITY_COUNT: usize = 3;

/// Traveling salesman problem over a fixed set of city coordinates.
///
/// A tour is a chromosome whose genes are city indexes; its fitness is the
/// reciprocal of the closed tour length, so shorter tours score higher.
#[derive(Debug, Clone)]
pub struct TravelingSalesman {
    cities: Vec<(f32, f32)>,
}

impl TravelingSalesman {
    pub fn new(cities: Vec<(f32, f32)>) -> Result<Self> {
        if cities.len() < MIN_CITY_COUNT {
            bail!(
                "a tour needs at least {} cities, got {}",
                MIN_CITY_COUNT,
                cities.len()
            );
        }
        Ok(TravelingSalesman { cities })
    }

    /// Places `count` cities evenly on a circle of the given radius.
    pub fn circle(count: usize, radius: f32) -> Result<Self> {
        let cities = (0..count)
            .map(|index| {
                let angle = TAU * index as f32 / count as f32;
                (radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::new(cities)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Builds a population of random tours, each visiting every city once.
    pub fn random_tours<R>(&self, size: usize, rng: &mut R) -> Population<usize>
    where
        R: Rng,
    {
        let mut population = Population::with_capacity(size);
        for _ in 0..size {
            let mut order: Vec<usize> = (0..self.cities.len()).collect();
            order.shuffle(rng);
            population.push(Chromosome::new(order));
        }
        population
    }

    /// Length of the closed tour visiting the cities in the given order.
    pub fn tour_length(&self, order: &[usize]) -> f32 {
        order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&from, &to)| {
                let (x1, y1) = self.cities[from];
                let (x2, y2) = self.cities[to];
                ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
            })
            .sum()
    }
}

impl FitnessCalculator<usize> for TravelingSalesman {
    fn calculate(&self, chromosome: &Chromosome<usize>) -> f32 {
        let length = self.tour_length(&chromosome.genes);
        if length > 0f32 {
            1.0 / length
        } else {
            0f32
        }
    }
}

#[cfg(test)]
mod tests {
    use common::random::Random;
    use common_test::get_seeded_rng;
    use evolve::{
        engine::{EvolutionEngine, PopulationEvolver},
        modification::{GeneticModifier, ModifierConfig, MutationStrategy},
        selection::TournamentSelector,
        validation::DistinctGeneValidator,
    };
    use rand::Rng;

    use super::*;

    #[test]
    fn test_new_should_reject_too_few_cities() {
        // When
        let result = TravelingSalesman::new(vec![(0.0, 0.0), (1.0, 0.0)]);

        // Then
        assert!(result.is_err(), "Should refuse a tour over two cities");
    }

    #[test]
    fn test_circle_should_place_cities_on_the_perimeter() {
        // Given
        let problem = TravelingSalesman::circle(6, 10.0).unwrap();

        // When
        let order: Vec<usize> = (0..problem.city_count()).collect();
        let length = problem.tour_length(&order);

        // Then: the hexagon side is 2 * radius * sin(PI / 6) = radius
        assert!(
            (length - 60.0).abs() < 1e-3,
            "Should walk the hexagon perimeter, got {}",
            length
        );
    }

    #[test]
    fn test_tour_length_should_not_depend_on_direction() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let problem = TravelingSalesman::circle(8, 5.0).unwrap();
        let mut order: Vec<usize> = (0..8).collect();
        order.shuffle(&mut rng);
        let mut reversed = order.clone();
        reversed.reverse();

        // Then
        assert!(
            (problem.tour_length(&order) - problem.tour_length(&reversed)).abs() < 1e-4,
            "Should measure the same length in both directions"
        );
    }

    #[test]
    fn test_random_tours_should_yield_permutations() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let problem = TravelingSalesman::circle(7, 1.0).unwrap();

        // When
        let population = problem.random_tours(5, &mut rng);

        // Then
        assert_eq!(5, population.len(), "Should build the requested tour count");
        for chromosome in population.iter() {
            let mut order = chromosome.genes.clone();
            order.sort_unstable();
            assert_eq!(
                (0..7).collect::<Vec<_>>(),
                order,
                "Should visit every city exactly once"
            );
        }
    }

    #[test]
    fn test_calculate_should_return_reciprocal_tour_length() {
        // Given
        let problem =
            TravelingSalesman::new(vec![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        let chromosome = Chromosome::new(vec![0, 1, 2]);

        // When: 3 + 4 + 5 closes the triangle
        let fitness = problem.calculate(&chromosome);

        // Then
        assert!(
            (fitness - 1.0 / 12.0).abs() < 1e-6,
            "Should score the reciprocal of the tour length, got {}",
            fitness
        );
    }

    #[test]
    fn test_engine_should_not_degrade_best_tour_with_elites() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let problem = TravelingSalesman::circle(6, 100.0).unwrap();
        let population = problem.random_tours(24, &mut rng);
        let initial_best = population
            .iter()
            .map(|chromosome| problem.calculate(chromosome))
            .fold(f32::MIN, f32::max);
        let modifier = GeneticModifier::new(
            ModifierConfig {
                mutation_rate: 0.3,
                crossover_rate: 0.8,
                crossover_points: 2,
            },
            MutationStrategy::Adjacent,
            Random::seeded(rng.gen()),
        )
        .unwrap();
        let evolver = PopulationEvolver::new(
            Box::new(TournamentSelector::new(3, Random::seeded(rng.gen()))),
            Box::new(modifier),
            Box::new(DistinctGeneValidator),
        );
        let mut engine = EvolutionEngine::new(evolver, Box::new(problem.clone()));

        // When
        let result = engine.run(population, 40, 2).unwrap();

        // Then
        let best = result.best().unwrap();
        assert!(
            best.fitness >= initial_best,
            "Should never lose the best tour while elites are kept"
        );
        let mut order = best.genes.clone();
        order.sort_unstable();
        assert_eq!(
            (0..6).collect::<Vec<_>>(),
            order,
            "Should keep tours as valid permutations"
        );
    }
}
