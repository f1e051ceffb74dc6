mod roulette;
mod tournament;

pub use roulette::RouletteSelector;
pub use tournament::TournamentSelector;

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::{error::EvolutionResult, Chromosome, Population};

/// Picks one chromosome from a population, biased toward fitness.
///
/// `total_fitness` is the fitness sum of `population`, computed once by
/// the caller and reused across draws within a generation; variants
/// that do not need it ignore it.
pub trait Selector<G> {
    fn choose<'a>(
        &mut self,
        population: &'a Population<G>,
        total_fitness: f32,
    ) -> EvolutionResult<&'a Chromosome<G>>;
}

/// Selection strategy choice for configuration surfaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SelectionType {
    Roulette,
    Tournament,
}
