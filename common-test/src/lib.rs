use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use common::random::RngWrapper;
use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "EVOLVE_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(seeds
        .entry(key)
        .or_insert_with(|| {
            let seed = env::var(key)
                .ok()
                .and_then(|seed_var| seed_var.parse::<u64>().ok())
                .unwrap_or_else(random);
            println!("Using seed {} for {}", seed, key);
            seed
        })
        .to_owned())
}

fn build_rng(key: Option<&'static str>) -> Result<StdRng, Box<dyn Error>> {
    let seed = get_seed(key.unwrap_or(DEFAULT_TEST_SEED_ENV))?;
    Ok(StdRng::seed_from_u64(seed))
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    build_rng(None)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    build_rng(Some(key))
}

/// Scripted [`RngWrapper`] replaying caller-supplied draws.
///
/// Fraction and index scripts cycle independently, so a short script can
/// drive an arbitrarily long run.
pub struct SequenceRng {
    fractions: Vec<f32>,
    indices: Vec<usize>,
    fraction_cursor: usize,
    index_cursor: usize,
}

impl SequenceRng {
    pub fn new(fractions: Vec<f32>, indices: Vec<usize>) -> Self {
        SequenceRng {
            fractions,
            indices,
            fraction_cursor: 0,
            index_cursor: 0,
        }
    }
}

impl RngWrapper for SequenceRng {
    fn gen_fraction(&mut self) -> f32 {
        let result = self.fractions[self.fraction_cursor];
        self.fraction_cursor = (self.fraction_cursor + 1) % self.fractions.len();
        result
    }

    fn gen_index(&mut self, upper: usize) -> usize {
        let result = self.indices[self.index_cursor];
        self.index_cursor = (self.index_cursor + 1) % self.indices.len();
        assert!(
            result < upper,
            "Scripted index {} not below {}",
            result,
            upper
        );
        result
    }
}
