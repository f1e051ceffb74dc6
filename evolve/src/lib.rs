pub mod engine;
pub mod error;
pub mod modification;
pub mod selection;
pub mod validation;

/// One candidate solution: an ordered gene sequence plus its score.
///
/// Gene order encodes the solution, so every operation that reorders
/// genes changes the candidate. Fitness starts at zero and is written
/// by the engine, higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome<G> {
    pub genes: Vec<G>,
    pub fitness: f32,
}

impl<G> Chromosome<G> {
    pub fn new(genes: Vec<G>) -> Self {
        Chromosome {
            genes,
            fitness: 0f32,
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// Insertion-ordered collection of chromosomes forming one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G> {
    pub chromosomes: Vec<Chromosome<G>>,
}

impl<G> Population<G> {
    pub fn new(chromosomes: Vec<Chromosome<G>>) -> Self {
        Population { chromosomes }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Population {
            chromosomes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome<G>> {
        self.chromosomes.iter()
    }

    pub fn push(&mut self, chromosome: Chromosome<G>) {
        self.chromosomes.push(chromosome);
    }

    /// Fitness sum across the whole population.
    pub fn total_fitness(&self) -> f32 {
        self.chromosomes.iter().map(|c| c.fitness).sum()
    }

    /// Highest-fitness chromosome, the earliest one on ties.
    pub fn best(&self) -> Option<&Chromosome<G>> {
        self.chromosomes.iter().reduce(|best, challenger| {
            if challenger.fitness > best.fitness {
                challenger
            } else {
                best
            }
        })
    }
}

impl<G> Default for Population<G> {
    fn default() -> Self {
        Self {
            chromosomes: Default::default(),
        }
    }
}

/// Caller-supplied scoring of one candidate solution.
///
/// Expected to be pure: promoted elites keep their previous score
/// instead of being rescored, which is only meaningful when equal
/// inputs score equally.
pub trait FitnessCalculator<G> {
    fn calculate(&self, chromosome: &Chromosome<G>) -> f32;
}

/// Adapts a plain function into a [`FitnessCalculator`].
pub struct FitnessFn<F> {
    function: F,
}

impl<F> FitnessFn<F> {
    pub fn new(function: F) -> Self {
        FitnessFn { function }
    }
}

impl<G, F> FitnessCalculator<G> for FitnessFn<F>
where
    F: Fn(&Chromosome<G>) -> f32,
{
    fn calculate(&self, chromosome: &Chromosome<G>) -> f32 {
        (self.function)(chromosome)
    }
}
