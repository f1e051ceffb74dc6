use std::rc::Rc;

use common::subject_observer::{Observer, SharedObservers, Subject};
use log::debug;

use crate::{
    error::{EvolutionError, EvolutionResult},
    FitnessCalculator, Population,
};

use super::{EventType, PopulationEvolver, Snapshot};

/// Generational driver: scores populations, steps the evolver and
/// publishes each completed epoch to registered observers.
pub struct EvolutionEngine<G> {
    observers: SharedObservers<Self, EventType>,
    evolver: PopulationEvolver<G>,
    fitness_calculator: Box<dyn FitnessCalculator<G>>,
    snapshot: Snapshot<G>,
}

impl<G> Subject<EventType> for EvolutionEngine<G>
where
    G: Clone,
{
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, EventType>>) {
        self.observers.push(observer);
    }

    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, EventType>>) {
        self.observers.retain(|obs| !Rc::ptr_eq(obs, &observer));
    }

    fn notify_observers(&self, event: EventType) {
        for obs in &self.observers {
            obs.update(self, event.clone());
        }
    }
}

impl<G> EvolutionEngine<G>
where
    G: Clone,
{
    pub fn new(
        evolver: PopulationEvolver<G>,
        fitness_calculator: Box<dyn FitnessCalculator<G>>,
    ) -> Self {
        EvolutionEngine {
            observers: vec![],
            evolver,
            fitness_calculator,
            snapshot: Snapshot::default(),
        }
    }

    /// State after the last completed generation.
    pub fn snapshot(&self) -> Snapshot<G> {
        self.snapshot.clone()
    }

    /// Runs the evolver for exactly `number_of_generations` generations
    /// and returns the final population.
    ///
    /// The beginning population is scored up front. After each
    /// generation every non-elite slot is rescored while promoted
    /// elites keep the fitness they carried over; observers then
    /// receive an `EpochCompleted`. A final `RunCompleted` follows the
    /// last epoch.
    pub fn run(
        &mut self,
        population: Population<G>,
        number_of_generations: u64,
        number_of_elites: usize,
    ) -> EvolutionResult<Population<G>> {
        if population.is_empty() {
            return Err(EvolutionError::invalid_argument(
                "population",
                "must not be empty",
            ));
        }

        let mut current = population;
        self.score_from(&mut current, 0);
        self.snapshot = Snapshot {
            generation: 0,
            population: current.clone(),
        };

        for generation in 1..=number_of_generations {
            current = self.evolver.evolve(&current, number_of_elites)?;
            let score_start = number_of_elites.min(current.len());
            self.score_from(&mut current, score_start);

            if let Some(best) = current.best() {
                debug!("generation {}: best fitness {}", generation, best.fitness);
            }

            self.snapshot = Snapshot {
                generation,
                population: current.clone(),
            };
            self.notify_observers(EventType::EpochCompleted);
        }

        self.notify_observers(EventType::RunCompleted);
        Ok(current)
    }

    /// Scores every chromosome from `start` on; earlier slots hold
    /// promoted elites whose fitness is already meaningful.
    fn score_from(&self, population: &mut Population<G>, start: usize) {
        for chromosome in population.chromosomes[start..].iter_mut() {
            let fitness = self.fitness_calculator.calculate(chromosome);
            chromosome.fitness = fitness;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use common::subject_observer::{Observer, Subject};
    use mockall::mock;

    use crate::{
        engine::{EventType, EvolutionEngine, PopulationEvolver, Snapshot},
        error::{EvolutionError, EvolutionResult},
        modification::Modifier,
        selection::Selector,
        validation::PredicateValidator,
        Chromosome, FitnessCalculator, FitnessFn, Population,
    };

    mock! {
        TestCalculator {}

        impl FitnessCalculator<u8> for TestCalculator {
            fn calculate(&self, chromosome: &Chromosome<u8>) -> f32;
        }
    }

    struct FirstSelector {
        calls: Rc<Cell<usize>>,
    }

    impl Selector<u8> for FirstSelector {
        fn choose<'a>(
            &mut self,
            population: &'a Population<u8>,
            _total_fitness: f32,
        ) -> EvolutionResult<&'a Chromosome<u8>> {
            self.calls.set(self.calls.get() + 1);
            Ok(&population.chromosomes[0])
        }
    }

    struct NoopModifier;

    impl Modifier<u8> for NoopModifier {
        fn mutate(&mut self, _chromosome: &mut Chromosome<u8>) -> EvolutionResult<()> {
            Ok(())
        }

        fn crossover(
            &mut self,
            _first: &mut Chromosome<u8>,
            _second: &mut Chromosome<u8>,
        ) -> EvolutionResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: RefCell<Vec<(u64, EventType)>>,
    }

    impl Observer<EvolutionEngine<u8>, EventType> for RecordingObserver {
        fn update(&self, source: &EvolutionEngine<u8>, event: EventType) {
            self.events
                .borrow_mut()
                .push((source.snapshot().generation, event));
        }
    }

    fn build_population(size: u8) -> Population<u8> {
        Population::new((0..size).map(|gene| Chromosome::new(vec![gene])).collect())
    }

    fn counting_calculator(counter: Rc<Cell<f32>>) -> Box<dyn FitnessCalculator<u8>> {
        Box::new(FitnessFn::new(move |_: &Chromosome<u8>| {
            counter.set(counter.get() + 1.0);
            counter.get()
        }))
    }

    fn build_engine(
        selector_calls: Rc<Cell<usize>>,
        counter: Rc<Cell<f32>>,
    ) -> EvolutionEngine<u8> {
        EvolutionEngine::new(
            PopulationEvolver::new(
                Box::new(FirstSelector {
                    calls: selector_calls,
                }),
                Box::new(NoopModifier),
                Box::new(PredicateValidator::new(|_: &Chromosome<u8>| true)),
            ),
            counting_calculator(counter),
        )
    }

    #[test]
    fn test_run_should_fail_when_population_is_empty() {
        // Given
        let mut engine = build_engine(Rc::default(), Rc::default());

        // When
        let result = engine.run(Population::default(), 3, 0);

        // Then
        assert!(
            matches!(
                result,
                Err(EvolutionError::InvalidArgument {
                    name: "population",
                    ..
                })
            ),
            "Should name the empty population"
        );
    }

    #[test]
    fn test_run_should_score_the_beginning_population() {
        // Given
        let mut engine = build_engine(Rc::default(), Rc::default());

        // When
        let result = engine.run(build_population(3), 0, 0).unwrap();

        // Then
        let fitnesses: Vec<_> = result.iter().map(|c| c.fitness).collect();
        assert_eq!(
            vec![1.0, 2.0, 3.0],
            fitnesses,
            "Should score every chromosome once, in order"
        );
        assert_eq!(0, engine.snapshot().generation);
    }

    #[test]
    fn test_run_should_invoke_the_evolver_once_per_generation_in_a_chain() {
        // Given
        let selector_calls = Rc::new(Cell::new(0));
        let counter = Rc::new(Cell::new(0.0));
        let mut engine = build_engine(selector_calls.clone(), counter.clone());

        // When
        let result = engine.run(build_population(3), 2, 0).unwrap();

        // Then
        let fitnesses: Vec<_> = result.iter().map(|c| c.fitness).collect();
        assert_eq!(
            vec![7.0, 8.0, 9.0],
            fitnesses,
            "Should rescore all three slots in each of the two generations"
        );
        assert_eq!(9.0, counter.get(), "Should score 3 + 3 + 3 chromosomes");
        assert_eq!(
            8,
            selector_calls.get(),
            "Should draw two parents per pair, twice per generation"
        );
    }

    #[test]
    fn test_run_should_retain_elite_fitness_across_generations() {
        // Given
        let counter = Rc::new(Cell::new(0.0));
        let mut engine = build_engine(Rc::default(), counter.clone());

        // When
        let result = engine.run(build_population(3), 1, 1).unwrap();

        // Then
        assert_eq!(
            3.0, result.chromosomes[0].fitness,
            "Should carry the elite score instead of rescoring it"
        );
        assert_eq!(
            vec![2],
            result.chromosomes[0].genes,
            "Should promote the highest scored chromosome"
        );
        let fitnesses: Vec<_> = result.iter().map(|c| c.fitness).collect();
        assert_eq!(vec![3.0, 4.0, 5.0], fitnesses);
    }

    #[test]
    fn test_run_should_not_rescore_promoted_elites() {
        // Given
        let mut calculator = MockTestCalculator::new();
        calculator.expect_calculate().times(5).return_const(1.0);
        let mut engine = EvolutionEngine::new(
            PopulationEvolver::new(
                Box::new(FirstSelector {
                    calls: Rc::default(),
                }),
                Box::new(NoopModifier),
                Box::new(PredicateValidator::new(|_: &Chromosome<u8>| true)),
            ),
            Box::new(calculator),
        );

        // When
        let result = engine.run(build_population(3), 1, 1).unwrap();

        // Then: three initial scores plus two non-elite slots
        assert_eq!(3, result.len());
    }

    #[test]
    fn test_run_should_notify_observers_after_each_epoch() {
        // Given
        let mut engine = build_engine(Rc::default(), Rc::default());
        let observer: Rc<RecordingObserver> = Rc::default();
        engine.register_observer(observer.clone());

        // When
        engine.run(build_population(3), 2, 0).unwrap();

        // Then
        assert_eq!(
            vec![
                (1, EventType::EpochCompleted),
                (2, EventType::EpochCompleted),
                (2, EventType::RunCompleted),
            ],
            *observer.events.borrow(),
            "Should publish one epoch per generation and a final completion"
        );
    }

    #[test]
    fn test_snapshot_should_be_defaulted_before_run() {
        // Given
        let engine = build_engine(Rc::default(), Rc::default());

        // When
        let result = engine.snapshot();

        // Then
        assert_eq!(Snapshot::<u8>::default(), result);
    }
}
