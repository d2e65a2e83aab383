//! Builder utilities for configuring graph generation.
//!
//! Exposes the seed selection surface used before constructing [`Generator`]
//! instances.

use crate::generator::Generator;

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use randgraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new().with_seed(42).build();
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    seed: Option<u64>,
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the seed so every run with the same parameters yields the same
    /// graph.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[must_use]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Constructs a [`Generator`] from the current configuration.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator::new(self.seed)
    }
}
