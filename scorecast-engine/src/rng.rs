//! Deterministic RNG streams segregated by batting side.
use std::cell::{RefCell, RefMut};

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

/// Deterministic bundle of RNG streams, one per batting side.
///
/// Each side draws from its own stream so one team's draw count never
/// perturbs the other team's sequence within a game.
#[derive(Debug, Clone)]
pub struct RngBundle {
    away: RefCell<CountingRng<ChaCha20Rng>>,
    home: RefCell<CountingRng<ChaCha20Rng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let away = CountingRng::new(derive_stream_seed(seed, b"away"));
        let home = CountingRng::new(derive_stream_seed(seed, b"home"));
        Self {
            away: RefCell::new(away),
            home: RefCell::new(home),
        }
    }

    /// Derive the bundle for one Monte Carlo trial.
    ///
    /// Trials seeded this way are mutually independent, so a batch may run
    /// them in any order or on any number of worker threads.
    #[must_use]
    pub fn for_trial(seed: u64, iteration: u64) -> Self {
        Self::from_user_seed(derive_stream_seed(seed, &iteration.to_le_bytes()))
    }

    /// Access the visiting team's RNG stream.
    #[must_use]
    pub fn away(&self) -> RefMut<'_, CountingRng<ChaCha20Rng>> {
        self.away.borrow_mut()
    }

    /// Access the home team's RNG stream.
    #[must_use]
    pub fn home(&self) -> RefMut<'_, CountingRng<ChaCha20Rng>> {
        self.home.borrow_mut()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<ChaCha20Rng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
