use std::sync::atomic::{AtomicI64, Ordering};

use log::trace;

use crate::meter::{BandwidthEstimator, NO_ESTIMATE};

/// Estimator whose value is pushed in from outside
///
/// Useful when the estimate is produced elsewhere (a player, a probe, a test)
/// and only needs to be surfaced through the estimator contract. Safe to update
/// from one thread while others read.
#[derive(Debug)]
pub struct ManualEstimator {
    estimate: AtomicI64,
}

impl Default for ManualEstimator {
    fn default() -> Self {
        Self::new(NO_ESTIMATE)
    }
}

impl ManualEstimator {
    pub fn new(bits_per_second: i64) -> Self {
        Self {
            estimate: AtomicI64::new(bits_per_second),
        }
    }

    /// Replaces the current estimate, returning the previous one
    pub fn set(&self, bits_per_second: i64) -> i64 {
        let previous = self.estimate.swap(bits_per_second, Ordering::AcqRel);
        trace!("Manual estimate changed: {} -> {}", previous, bits_per_second);
        previous
    }

    pub fn reset(&self) {
        self.set(NO_ESTIMATE);
    }
}

impl BandwidthEstimator for ManualEstimator {
    fn bitrate_estimate(&self) -> i64 {
        self.estimate.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_estimate() {
        let estimator = ManualEstimator::default();
        assert_eq!(estimator.bitrate_estimate(), NO_ESTIMATE);
    }

    #[test]
    fn test_set_and_reset() {
        let estimator = ManualEstimator::new(250_000);
        assert_eq!(estimator.set(1_000_000), 250_000);
        assert_eq!(estimator.bitrate_estimate(), 1_000_000);

        estimator.reset();
        assert_eq!(estimator.bitrate_estimate(), NO_ESTIMATE);
    }
}
