//! Construction parameters for [`GrowableArray`](crate::array::GrowableArray).

/// Capacity used by [`GrowableArray::new`](crate::array::GrowableArray::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity multiplier applied when the backing buffer is full.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

const MIN_GROWTH_FACTOR: usize = 2;
const MAX_GROWTH_FACTOR: usize = 16;

/// How an array allocates its first buffer and how it grows.
///
/// With the `serde` feature enabled, missing fields take their defaults:
///
/// ```text
/// { "initial_capacity": 64 }   // growth_factor = 2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub initial_capacity: usize,
    pub growth_factor: usize,
}

impl Config {
    pub fn new() -> Self {
        Config {
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Factors below 2 would not amortize appends and are raised to 2.
    /// Factors above 16 are lowered to 16.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// The growth factor actually used.
    pub fn effective_growth_factor(&self) -> usize {
        self.growth_factor.clamp(MIN_GROWTH_FACTOR, MAX_GROWTH_FACTOR)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.initial_capacity, 10);
        assert_eq!(config.growth_factor, 2);
    }

    #[test]
    fn builder_setters() {
        let config = Config::new().with_initial_capacity(3).with_growth_factor(4);
        assert_eq!(config.initial_capacity, 3);
        assert_eq!(config.effective_growth_factor(), 4);
    }

    #[test]
    fn small_growth_factor_is_raised() {
        assert_eq!(Config::new().with_growth_factor(0).effective_growth_factor(), 2);
        assert_eq!(Config::new().with_growth_factor(1).effective_growth_factor(), 2);
    }

    #[test]
    fn huge_growth_factor_is_lowered() {
        assert_eq!(Config::new().with_growth_factor(1 << 40).effective_growth_factor(), 16);
        assert_eq!(Config::new().with_growth_factor(usize::MAX).effective_growth_factor(), 16);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_document_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "initial_capacity": 64 }"#).unwrap();
        assert_eq!(config, Config::new().with_initial_capacity(64));
    }
}
