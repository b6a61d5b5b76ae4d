use super::results::ResultSet;
use super::round::Round;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Batch driver: plays rounds sequentially and collects every record.
///
/// Owns the RNG so a seeded run replays exactly. Rounds are strictly
/// sequential; round i+1 never starts before round i's pair of records
/// is appended.
pub struct Simulation<R: rand::Rng> {
    rng: R,
}

impl Simulation<SmallRng> {
    /// OS-seeded simulation.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
    /// Reproducible simulation from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Simulation<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> Simulation<R> {
    /// Simulation over any random source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
    /// Plays `rounds` rounds and returns all `2 * rounds` records in
    /// call order, stay before switch within each round.
    ///
    /// Fails fast on `rounds < 1` rather than returning an empty set.
    pub fn run(&mut self, rounds: usize) -> Result<ResultSet> {
        anyhow::ensure!(rounds >= 1, "rounds must be positive, got {}", rounds);
        log::info!("{:<32}{:<32}", "simulating rounds", rounds);
        Ok(ResultSet::from(
            (0..rounds)
                .flat_map(|_| Round::play(&mut self.rng))
                .collect::<Vec<_>>(),
        ))
    }
}
