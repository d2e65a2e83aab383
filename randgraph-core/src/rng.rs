//! Uniform random sources consumed by the graph generators.
//!
//! Generators only ever ask for a uniform sample in `[0, 1)`, so the seam is a
//! single-method trait. Production callers use [`SeededSource`]; tests replay
//! exact sequences with [`ScriptedSource`].

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{Result, error::RandGraphError};

/// A uniform sampler over `[0, 1)`.
///
/// # Examples
/// ```
/// use randgraph_core::{RandomSource, SeededSource};
///
/// let mut source = SeededSource::from_seed(7);
/// let sample = source.next_f64();
/// assert!((0.0..1.0).contains(&sample));
/// ```
pub trait RandomSource {
    /// Returns the next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// [`RandomSource`] backed by a [`SmallRng`].
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    /// Creates a reproducible source from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// [`RandomSource`] that replays a fixed sequence of samples.
///
/// The sequence wraps around once exhausted, so a short script can drive a
/// generator that draws more samples than were listed.
///
/// # Examples
/// ```
/// use randgraph_core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.25, 0.75]).expect("samples are in range");
/// assert_eq!(source.next_f64(), 0.25);
/// assert_eq!(source.next_f64(), 0.75);
/// assert_eq!(source.next_f64(), 0.25);
/// assert_eq!(source.drawn(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
    drawn: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `samples` in order.
    ///
    /// # Errors
    /// Returns [`RandGraphError::InvalidParameter`] when `samples` is empty or
    /// contains a value outside `[0, 1)`.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(RandGraphError::invalid(
                "samples",
                "a scripted source needs at least one sample",
            ));
        }
        if let Some((index, value)) = samples
            .iter()
            .enumerate()
            .find(|(_, value)| !(0.0..1.0).contains(*value))
        {
            return Err(RandGraphError::invalid(
                "samples",
                format!("sample {index} ({value}) must lie in [0, 1)"),
            ));
        }
        Ok(Self {
            samples,
            cursor: 0,
            drawn: 0,
        })
    }

    /// Returns how many samples have been handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.samples.get(self.cursor).copied().unwrap_or_default();
        self.cursor = (self.cursor + 1) % self.samples.len();
        self.drawn += 1;
        value
    }
}
