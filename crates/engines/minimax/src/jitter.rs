//! Seedable leaf-score perturbation.
//!
//! A tiny random offset on decided leaves makes equally good moves compare
//! unequal, so the engine varies its play between runs. An amplitude of zero
//! turns it off and the search becomes fully deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ttt_core::Score;

/// Amplitude the reference engine uses when jitter is switched on.
pub const DEFAULT_AMPLITUDE: Score = 0.01;

#[derive(Debug, Clone)]
pub struct Jitter {
    amplitude: Score,
    rng: StdRng,
}

impl Default for Jitter {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Jitter {
    pub fn disabled() -> Self {
        Self {
            amplitude: 0.0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Uniform offsets in `[-amplitude, amplitude]`. Without a seed the
    /// generator is seeded from the OS.
    pub fn new(amplitude: Score, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            amplitude: amplitude.abs(),
            rng,
        }
    }

    pub fn amplitude(&self) -> Score {
        self.amplitude
    }

    pub fn is_enabled(&self) -> bool {
        self.amplitude > 0.0
    }

    #[inline]
    pub fn sample(&mut self) -> Score {
        if self.is_enabled() {
            self.rng.gen_range(-self.amplitude..=self.amplitude)
        } else {
            0.0
        }
    }

    /// Independent stream for a parallel subtree, derived from this one.
    pub fn fork(&mut self) -> Jitter {
        Jitter {
            amplitude: self.amplitude,
            rng: StdRng::seed_from_u64(self.rng.gen()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_jitter_is_zero() {
        let mut jitter = Jitter::disabled();
        assert!(!jitter.is_enabled());
        assert!((0..100).all(|_| jitter.sample() == 0.0));
    }

    #[test]
    fn test_samples_stay_within_amplitude() {
        let mut jitter = Jitter::new(DEFAULT_AMPLITUDE, Some(3));
        for _ in 0..1000 {
            let s = jitter.sample();
            assert!(s.abs() <= DEFAULT_AMPLITUDE);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Jitter::new(0.5, Some(11));
        let mut b = Jitter::new(0.5, Some(11));
        for _ in 0..20 {
            assert_eq!(a.sample(), b.sample());
        }
        assert_eq!(a.fork().sample(), b.fork().sample());
    }
}
