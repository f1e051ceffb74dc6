use crate::Chromosome;

/// Admissibility predicate over candidate solutions.
pub trait Validator<G> {
    fn is_valid(&self, chromosome: &Chromosome<G>) -> bool;
}

/// Accepts chromosomes whose gene values are pairwise distinct.
///
/// The natural check for permutation encodings, where crossover can
/// duplicate genes.
pub struct DistinctGeneValidator;

impl<G> Validator<G> for DistinctGeneValidator
where
    G: PartialEq,
{
    fn is_valid(&self, chromosome: &Chromosome<G>) -> bool {
        chromosome
            .genes
            .iter()
            .enumerate()
            .all(|(index, gene)| !chromosome.genes[index + 1..].contains(gene))
    }
}

/// Wraps an arbitrary predicate as a [`Validator`].
pub struct PredicateValidator<F> {
    predicate: F,
}

impl<F> PredicateValidator<F> {
    pub fn new(predicate: F) -> Self {
        PredicateValidator { predicate }
    }
}

impl<G, F> Validator<G> for PredicateValidator<F>
where
    F: Fn(&Chromosome<G>) -> bool,
{
    fn is_valid(&self, chromosome: &Chromosome<G>) -> bool {
        (self.predicate)(chromosome)
    }
}
