use std::{
    fmt::Debug,
    io::{Error, ErrorKind},
    net::ToSocketAddrs,
};

use common::subject_observer::Observer;
use dipstick::{Graphite, Input};
use evolve::engine::{EventType, EvolutionEngine};

use super::{EVOLVE_PROXY, MAX};

/// Forwards the best fitness of each completed generation to a Graphite
/// server.
pub struct GraphiteGateway {}

impl GraphiteGateway {
    pub fn new<A>(address: A) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let graphite_scope = Graphite::send_to(address)
            .map_err(|error| Error::new(ErrorKind::Other, error.to_string()))?
            .metrics();
        EVOLVE_PROXY.target(graphite_scope);
        Ok(GraphiteGateway {})
    }
}

impl<G> Observer<EvolutionEngine<G>, EventType> for GraphiteGateway
where
    G: Clone,
{
    fn update(&self, source: &EvolutionEngine<G>, event: EventType) {
        if event == EventType::EpochCompleted {
            let snapshot = source.snapshot();
            if let Some(best) = snapshot.population.best() {
                MAX.value(best.fitness);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphiteGateway;

    #[test]
    fn test_graphite_gateway_new() {
        // When
        let result = GraphiteGateway::new("");
        // Then
        assert!(
            matches!(result, Err(_)),
            "Should fail when the address is not valid"
        );

        // When
        let result = GraphiteGateway::new("127.0.0.1:2003");
        // Then
        assert!(
            matches!(result, Ok(_)),
            "Should succeed when the address is valid"
        );
    }
}
