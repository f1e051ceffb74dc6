mod graphite_gateway;
mod statsd_gateway;

pub use graphite_gateway::GraphiteGateway;
pub use statsd_gateway::StatsdGateway;

use dipstick::*;

metrics! {
    EVOLVE_PROXY: Proxy = "evolution" => {
        MIN: Gauge = "min-fitness";
        MAX: Gauge = "max-fitness";
        MEAN: Gauge = "mean-fitness";
        STD_DEV: Gauge = "std-dev-fitness";
    }
}
