use std::rc::Rc;

use common::{
    random::Random,
    subject_observer::{Observer, Subject},
};
use dipstick::{Input, InputScope, Log, LogScope};
use evolve::{
    engine::{EventType, EvolutionEngine, PopulationEvolver},
    modification::{GeneticModifier, ModifierConfig, MutationStrategy},
    selection::TournamentSelector,
    validation::DistinctGeneValidator,
};
use log::{error, info};
use samples::tsp::TravelingSalesman;
use simple_logger::SimpleLogger;

const CITY_COUNT: usize = 12;
const POPULATION_SIZE: usize = 64;
const GENERATIONS: u64 = 200;
const NUMBER_OF_ELITES: usize = 2;
const NUMBER_OF_PLAYERS: usize = 4;

struct BestFitnessObserver {
    log_scope: LogScope,
}

impl BestFitnessObserver {
    fn new() -> Self {
        BestFitnessObserver {
            log_scope: Log::to_log().level(log::Level::Trace).metrics(),
        }
    }
}

impl Observer<EvolutionEngine<usize>, EventType> for BestFitnessObserver {
    fn update(&self, source: &EvolutionEngine<usize>, event: EventType) {
        if event != EventType::EpochCompleted {
            return;
        }
        let snapshot = source.snapshot();
        if let Some(best) = snapshot.population.best() {
            self.log_scope.gauge("best-fitness").value(best.fitness);
        }
    }
}

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .unwrap();

    let problem = TravelingSalesman::circle(CITY_COUNT, 100.0).unwrap();
    let population = problem.random_tours(POPULATION_SIZE, &mut rand::thread_rng());

    let modifier = GeneticModifier::new(
        ModifierConfig {
            mutation_rate: 0.3,
            crossover_rate: 0.8,
            crossover_points: 2,
        },
        MutationStrategy::Adjacent,
        Random::from_entropy(),
    )
    .unwrap();
    let evolver = PopulationEvolver::new(
        Box::new(TournamentSelector::new(
            NUMBER_OF_PLAYERS,
            Random::from_entropy(),
        )),
        Box::new(modifier),
        Box::new(DistinctGeneValidator),
    );
    let mut engine = EvolutionEngine::new(evolver, Box::new(problem.clone()));

    let observer = Rc::new(BestFitnessObserver::new());
    engine.register_observer(observer.clone());

    let result = engine.run(population, GENERATIONS, NUMBER_OF_ELITES);

    engine.unregister_observer(observer);

    match result {
        Ok(final_population) => {
            if let Some(best) = final_population.best() {
                info!(
                    "best tour after {} generations: {:?} (length {})",
                    GENERATIONS,
                    best.genes,
                    problem.tour_length(&best.genes)
                );
            }
        }
        Err(error) => error!("evolution failed: {}", error),
    }
}
