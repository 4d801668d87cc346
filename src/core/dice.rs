//! The five-coin toss.
//!
//! Patolli is played with five marked beans or coins instead of dice. A toss
//! scores one point per coin that lands painted side up, giving a value in
//! `0..=5`.

use super::rng::GameRng;

/// Number of coins thrown per toss.
pub const COIN_COUNT: u8 = 5;

#[derive(Clone, Debug)]
enum Source {
    Random(GameRng),
    /// Fixed cyclic sequence of toss values.
    Loaded { values: Vec<u8>, cursor: usize },
}

/// Toss source owned by one game.
#[derive(Clone, Debug)]
pub struct Dice {
    source: Source,
}

impl Dice {
    /// Fair coins driven by the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            source: Source::Random(rng),
        }
    }

    /// Fair coins with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Replay the given toss values in order, cycling when exhausted.
    ///
    /// Used for scripted hosts and replays.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or any value exceeds [`COIN_COUNT`].
    pub fn loaded(values: impl IntoIterator<Item = u8>) -> Self {
        let values: Vec<u8> = values.into_iter().collect();
        assert!(!values.is_empty(), "Loaded dice need at least one value");
        assert!(
            values.iter().all(|&v| v <= COIN_COUNT),
            "Toss values must be in 0..={COIN_COUNT}"
        );

        Self {
            source: Source::Loaded { values, cursor: 0 },
        }
    }

    /// Throw all five coins and count the painted faces.
    pub fn toss(&mut self) -> u8 {
        match &mut self.source {
            Source::Random(rng) => (0..COIN_COUNT).filter(|_| rng.gen_bool(0.5)).count() as u8,
            Source::Loaded { values, cursor } => {
                let value = values[*cursor];
                *cursor = (*cursor + 1) % values.len();
                value
            }
        }
    }
}
