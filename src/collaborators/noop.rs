//! No-op collaborators that never estimate and ignore every transfer.

use std::convert::Infallible;

use crate::meter::{BandwidthEstimator, NO_ESTIMATE, TransferObserver};
use crate::models::DataSpec;

/// Estimator that never has an estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEstimate;

impl BandwidthEstimator for NoEstimate {
    fn bitrate_estimate(&self) -> i64 {
        NO_ESTIMATE
    }
}

/// Observer that accepts and discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<S> TransferObserver<S> for NoObserver {
    type Error = Infallible;

    fn on_transfer_start(&self, _source: &S, _spec: &DataSpec) -> Result<(), Infallible> {
        Ok(())
    }

    fn on_bytes_transferred(&self, _source: &S, _bytes: u64) -> Result<(), Infallible> {
        Ok(())
    }

    fn on_transfer_end(&self, _source: &S) -> Result<(), Infallible> {
        Ok(())
    }
}
