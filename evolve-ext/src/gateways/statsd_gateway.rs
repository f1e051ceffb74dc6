use std::{
    fmt::Debug,
    io::{Error, ErrorKind},
    net::ToSocketAddrs,
};

use common::subject_observer::Observer;
use dipstick::{Input, Statsd};
use evolve::{
    engine::{EventType, EvolutionEngine},
    Population,
};
use log::trace;

use crate::gateways::{EVOLVE_PROXY, MAX, MEAN, MIN, STD_DEV};

/// Forwards fitness statistics of each completed generation to a statsd
/// daemon.
///
/// Gauges carry integral values, so fitnesses are multiplied by `factor`
/// before being sent. Pick a factor large enough to preserve the digits
/// that matter for the problem at hand.
pub struct StatsdGateway {
    factor: f32,
}

impl StatsdGateway {
    pub fn new<A>(address: A, factor: f32) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)
            .map_err(|error| Error::new(ErrorKind::Other, error.to_string()))?
            .metrics();
        EVOLVE_PROXY.target(statsd_scope);

        Ok(StatsdGateway { factor })
    }

    fn compute_stats<G>(&self, population: &Population<G>) -> (f32, f32, f32, f32) {
        let fitness_iter = population
            .iter()
            .map(|chromosome| chromosome.fitness * self.factor);
        let (min, max, sum, count) = fitness_iter.clone().fold(
            (f32::INFINITY, f32::NEG_INFINITY, 0.0, 0),
            |(min, max, sum, count), value| {
                (min.min(value), max.max(value), sum + value, count + 1)
            },
        );
        let mean = sum / count as f32;
        let variance: f32 = fitness_iter
            .map(|value| (value - mean).powi(2))
            .sum::<f32>()
            / count as f32;
        let std_dev = variance.sqrt();
        (min, max, mean, std_dev)
    }
}

impl<G> Observer<EvolutionEngine<G>, EventType> for StatsdGateway
where
    G: Clone,
{
    fn update(&self, source: &EvolutionEngine<G>, event: EventType) {
        if event == EventType::EpochCompleted {
            let snapshot = source.snapshot();
            let (min, max, mean, std_dev) = self.compute_stats(&snapshot.population);

            trace!("Sending metrics for generation {}: min={min}, max={max}, mean={mean}, std-dev={std_dev}", snapshot.generation);
            MIN.value(min);
            MAX.value(max);
            MEAN.value(mean);
            STD_DEV.value(std_dev);
        }
    }
}
