//! Capability contracts joined by the data meter
//!
//! Both traits are implemented for `&T`, `Arc<T>` and `Box<T>`, so collaborators
//! can be handed to a [`DataMeter`](super::DataMeter) by reference or through
//! shared ownership without the meter taking over their lifetime.

use auto_impl::auto_impl;

use crate::models::DataSpec;

/// Returned by estimators that have not produced an estimate yet
pub const NO_ESTIMATE: i64 = -1;

/// Reports the current network throughput estimate
#[auto_impl(&, Arc, Box)]
pub trait BandwidthEstimator {
    /// Current estimate in bits per second, or [`NO_ESTIMATE`]
    fn bitrate_estimate(&self) -> i64;
}

/// Receives lifecycle notifications for data transfers read from sources of type `S`
///
/// Notifications for one source arrive as a start, any number of byte counts,
/// then an end. Implementations that track state use interior mutability since
/// every callback takes `&self`.
#[auto_impl(&, Arc, Box)]
pub trait TransferObserver<S> {
    type Error;

    fn on_transfer_start(&self, source: &S, spec: &DataSpec) -> Result<(), Self::Error>;

    /// Called with the number of bytes moved since the previous notification
    fn on_bytes_transferred(&self, source: &S, bytes: u64) -> Result<(), Self::Error>;

    fn on_transfer_end(&self, source: &S) -> Result<(), Self::Error>;
}
