use config::{Config, Environment, File, FileFormat};
use evolve::{modification::MutationKind, selection::SelectionType};
use serde::Deserialize;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

/// Run settings, loaded from the embedded defaults and overridable through
/// `APP_`-prefixed environment variables.
///
/// Metrics stay off unless a statsd host is configured.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub city_count: usize,
    pub population_size: usize,
    pub generations: u64,
    pub number_of_elites: usize,
    pub selection: SelectionType,
    pub number_of_players: usize,
    pub mutation: MutationKind,
    pub mutation_rate: f32,
    pub crossover_rate: f32,
    pub crossover_points: usize,
    pub seed: Option<u64>,
    pub statsd_host: Option<String>,
    pub statsd_port: u16,
    pub statsd_factor: f32,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }
}
