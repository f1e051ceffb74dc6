use common::random::RngWrapper;

use crate::{
    error::{EvolutionError, EvolutionResult},
    Chromosome, Population,
};

use super::Selector;

/// Best-of-`k` selection.
///
/// Draws random population indexes until `k` distinct entrants are
/// collected, then returns the entrant with the strictly highest
/// fitness. Ties keep the earliest drawn entrant. Distinctness is by
/// index, so a population full of equal chromosomes cannot stall the
/// draw.
pub struct TournamentSelector<R> {
    number_of_players: usize,
    rng: R,
}

impl<R> TournamentSelector<R>
where
    R: RngWrapper,
{
    pub fn new(number_of_players: usize, rng: R) -> Self {
        TournamentSelector {
            number_of_players,
            rng,
        }
    }
}

impl<G, R> Selector<G> for TournamentSelector<R>
where
    R: RngWrapper,
{
    fn choose<'a>(
        &mut self,
        population: &'a Population<G>,
        _total_fitness: f32,
    ) -> EvolutionResult<&'a Chromosome<G>> {
        if population.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "population",
                "must not be empty",
            ));
        }
        let len = population.len();
        if self.number_of_players < 2 || self.number_of_players > len {
            return Err(EvolutionError::out_of_range(
                "number_of_players",
                format!("{} must lie within [2, {}]", self.number_of_players, len),
            ));
        }

        let mut entrants: Vec<usize> = Vec::with_capacity(self.number_of_players);
        while entrants.len() < self.number_of_players {
            let index = self.rng.gen_index(len);
            if !entrants.contains(&index) {
                entrants.push(index);
            }
        }

        let mut winner = entrants[0];
        for &entrant in &entrants[1..] {
            if population.chromosomes[entrant].fitness > population.chromosomes[winner].fitness {
                winner = entrant;
            }
        }
        Ok(&population.chromosomes[winner])
    }
}
