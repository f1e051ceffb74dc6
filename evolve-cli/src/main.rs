use std::{process::exit, rc::Rc};

use common::{random::Random, subject_observer::Subject};
use evolve::{
    engine::{EvolutionEngine, PopulationEvolver},
    modification::{GeneticModifier, ModifierConfig},
    selection::{RouletteSelector, SelectionType, Selector, TournamentSelector},
    validation::DistinctGeneValidator,
};
use evolve_ext::gateways::StatsdGateway;
use log::{debug, error, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use samples::tsp::TravelingSalesman;
use thiserror::Error;

use crate::config::app::AppConfig;

mod config;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ::config::ConfigError),
    #[error("Evolution error: {0}")]
    Evolution(#[from] evolve::error::EvolutionError),
    #[error("Gateway error: {0}")]
    Gateway(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn main() {
    config::log::init();

    if let Err(error) = run() {
        error!("{}", error);
        exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let app_config = AppConfig::new()?;
    debug!("Starting evolution with configuration: {:?}", app_config);

    let mut rng = match app_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let problem = TravelingSalesman::circle(app_config.city_count, 100.0)?;
    let population = problem.random_tours(app_config.population_size, &mut rng);

    let selector: Box<dyn Selector<usize>> = match app_config.selection {
        SelectionType::Roulette => Box::new(RouletteSelector::new(Random::seeded(rng.gen()))),
        SelectionType::Tournament => Box::new(TournamentSelector::new(
            app_config.number_of_players,
            Random::seeded(rng.gen()),
        )),
    };
    let modifier = GeneticModifier::new(
        ModifierConfig {
            mutation_rate: app_config.mutation_rate,
            crossover_rate: app_config.crossover_rate,
            crossover_points: app_config.crossover_points,
        },
        app_config.mutation.into(),
        Random::seeded(rng.gen()),
    )?;
    let evolver = PopulationEvolver::new(
        selector,
        Box::new(modifier),
        Box::new(DistinctGeneValidator),
    );
    let mut engine = EvolutionEngine::new(evolver, Box::new(problem.clone()));

    let gateway = match &app_config.statsd_host {
        Some(host) => {
            let gateway = Rc::new(StatsdGateway::new(
                (host.clone(), app_config.statsd_port),
                app_config.statsd_factor,
            )?);
            engine.register_observer(gateway.clone());
            Some(gateway)
        }
        None => None,
    };

    let result = engine.run(
        population,
        app_config.generations,
        app_config.number_of_elites,
    );

    if let Some(gateway) = gateway {
        engine.unregister_observer(gateway);
    }

    let final_population = result?;
    if let Some(best) = final_population.best() {
        info!(
            "best tour after {} generations: {:?} (length {})",
            app_config.generations,
            best.genes,
            problem.tour_length(&best.genes)
        );
    }
    Ok(())
}
