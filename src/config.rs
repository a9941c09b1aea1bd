// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

use crate::errs::SkipListError;

/// How many equal values a single node can hold before another node is
/// allocated for the same key.
pub const DEFAULT_BUCKET_CAPACITY: usize = 10;

/// Construction options for a [`crate::skiplist::SkipList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Config {
    bucket_capacity: usize,
    /// Seed for the level generator. `None` seeds from the OS.
    seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_capacity(mut self, bucket_capacity: usize) -> Self {
        self.bucket_capacity = bucket_capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SkipListError> {
        if self.bucket_capacity == 0 {
            return Err(SkipListError::InvalidConfig(
                "bucket capacity must be non-zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.bucket_capacity(), DEFAULT_BUCKET_CAPACITY);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::new().with_bucket_capacity(3).with_seed(42);
        assert_eq!(config.bucket_capacity(), 3);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_zero_bucket_capacity() {
        let config = Config::new().with_bucket_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(SkipListError::InvalidConfig(_))
        ));
    }
}
