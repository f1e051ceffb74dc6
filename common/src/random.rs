use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of randomness injected into every component that draws.
///
/// Keeping the draws behind a trait lets tests script exact sequences
/// instead of seeding and hoping.
pub trait RngWrapper {
    /// Uniform draw in `[0, 1)`.
    fn gen_fraction(&mut self) -> f32;

    /// Uniform draw in `[0, upper)`. `upper` must be non-zero.
    fn gen_index(&mut self, upper: usize) -> usize;
}

/// Adapter exposing any [`rand::Rng`] through [`RngWrapper`].
pub struct Random<T>
where
    T: Rng,
{
    rng: T,
}

impl<T> Random<T>
where
    T: Rng,
{
    pub fn new(rng: T) -> Self {
        Random { rng }
    }
}

impl Random<StdRng> {
    /// Reproducible generator for a known seed.
    pub fn seeded(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Random {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<T> RngWrapper for Random<T>
where
    T: Rng,
{
    fn gen_fraction(&mut self) -> f32 {
        self.rng.gen()
    }

    fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}
