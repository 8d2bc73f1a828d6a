use rand::{
    rngs::{StdRng, ThreadRng},
    RngCore, SeedableRng,
};

/// Where random draws come from
#[derive(Default)]
pub enum RngSource<'a> {
    /// The thread-local generator of the process
    #[default]
    Default,
    /// A fresh generator seeded from the given value, reproducible
    Seed(u64),
    /// A generator owned by the caller, borrowed for the draw
    Provided(&'a mut dyn RngCore),
}
impl From<u64> for RngSource<'_> {
    fn from(seed: u64) -> Self {
        RngSource::Seed(seed)
    }
}
impl From<Option<u64>> for RngSource<'_> {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::Seed(seed),
            None => RngSource::Default,
        }
    }
}
impl<'a, R: RngCore> From<&'a mut R> for RngSource<'a> {
    fn from(rng: &'a mut R) -> Self {
        RngSource::Provided(rng)
    }
}

/// A usable generator resolved from an [`RngSource`]
pub enum Generator<'a> {
    Thread(ThreadRng),
    Seeded(StdRng),
    Provided(&'a mut dyn RngCore),
}

/// Turn a source description into a generator
pub fn random_number_generator(source: RngSource<'_>) -> Generator<'_> {
    match source {
        RngSource::Default => Generator::Thread(rand::thread_rng()),
        RngSource::Seed(seed) => Generator::Seeded(StdRng::seed_from_u64(seed)),
        RngSource::Provided(rng) => Generator::Provided(rng),
    }
}

impl RngCore for Generator<'_> {
    fn next_u32(&mut self) -> u32 {
        match self {
            Generator::Thread(rng) => rng.next_u32(),
            Generator::Seeded(rng) => rng.next_u32(),
            Generator::Provided(rng) => rng.next_u32(),
        }
    }
    fn next_u64(&mut self) -> u64 {
        match self {
            Generator::Thread(rng) => rng.next_u64(),
            Generator::Seeded(rng) => rng.next_u64(),
            Generator::Provided(rng) => rng.next_u64(),
        }
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Generator::Thread(rng) => rng.fill_bytes(dest),
            Generator::Seeded(rng) => rng.fill_bytes(dest),
            Generator::Provided(rng) => rng.fill_bytes(dest),
        }
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Generator::Thread(rng) => rng.try_fill_bytes(dest),
            Generator::Seeded(rng) => rng.try_fill_bytes(dest),
            Generator::Provided(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = random_number_generator(RngSource::Seed(42));
        let mut b = random_number_generator(42u64.into());
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn option_seed() {
        assert!(matches!(RngSource::from(Some(7u64)), RngSource::Seed(7)));
        assert!(matches!(RngSource::from(None::<u64>), RngSource::Default));
        assert!(matches!(RngSource::default(), RngSource::Default));
    }

    #[test]
    fn provided_generator_is_advanced() {
        let mut owned = StdRng::seed_from_u64(3);
        let mut reference = StdRng::seed_from_u64(3);
        {
            let mut generator = random_number_generator(RngSource::from(&mut owned));
            assert_eq!(generator.next_u64(), reference.next_u64());
        }
        // the borrowed generator keeps its state after the draw
        assert_eq!(owned.next_u64(), reference.next_u64());
    }
}
