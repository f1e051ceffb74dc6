mod genetic_modifier;

pub use genetic_modifier::GeneticModifier;

use serde::Deserialize;
use strum::{Display, EnumString};
use validator::Validate;

use crate::{error::EvolutionResult, Chromosome};

pub const DEFAULT_MUTATION_RATE: f32 = 0.07;
pub const DEFAULT_CROSSOVER_RATE: f32 = 0.02;
pub const DEFAULT_CROSSOVER_POINTS: usize = 2;

/// In-place chromosome perturbation.
///
/// Both operations mutate their arguments directly; callers supply
/// independent clones when the originals must survive.
pub trait Modifier<G> {
    /// Perturbs genes in place, one rate draw per gene index.
    fn mutate(&mut self, chromosome: &mut Chromosome<G>) -> EvolutionResult<()>;

    /// Exchanges gene segments between two equal-length chromosomes.
    fn crossover(
        &mut self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
    ) -> EvolutionResult<()>;
}

/// Caller-supplied per-gene mutation callback.
pub type MutationFn<G> = Box<dyn FnMut(&mut Chromosome<G>, usize)>;

/// Behavior applied to a gene whose mutation rate draw passes.
pub enum MutationStrategy<G> {
    /// Swap the gene with its right neighbour, wrapping at the end.
    Adjacent,
    /// Swap the gene with one at a freshly drawn random index.
    Random,
    /// Delegate to a caller-supplied callback.
    Custom(MutationFn<G>),
}

impl<G> Default for MutationStrategy<G> {
    fn default() -> Self {
        MutationStrategy::Adjacent
    }
}

/// Mutation strategy choice for configuration surfaces; the
/// callback-backed variant can only be built in code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MutationKind {
    Adjacent,
    Random,
}

impl<G> From<MutationKind> for MutationStrategy<G> {
    fn from(kind: MutationKind) -> Self {
        match kind {
            MutationKind::Adjacent => MutationStrategy::Adjacent,
            MutationKind::Random => MutationStrategy::Random,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct ModifierConfig {
    /// Chance in [0, 1] for each gene to mutate.
    #[validate(range(min = 0.0, max = 1.0))]
    pub mutation_rate: f32,
    /// Chance in [0, 1] for a parent pair to cross over.
    #[validate(range(min = 0.0, max = 1.0))]
    pub crossover_rate: f32,
    /// Cut points drawn per crossover; zero disables the exchange.
    pub crossover_points: usize,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        ModifierConfig {
            mutation_rate: DEFAULT_MUTATION_RATE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            crossover_points: DEFAULT_CROSSOVER_POINTS,
        }
    }
}
