//! The data meter composite
//!
//! [`DataMeter`] joins a [`BandwidthEstimator`] and a [`TransferObserver`] into a
//! single value that satisfies both contracts. It adds no behaviour of its own:
//! each call is forwarded once, inline, to the collaborator that owns the
//! capability, and the collaborator's answer is handed back untouched.

use log::debug;

use crate::meter::capability::{BandwidthEstimator, TransferObserver};
use crate::meter::errors::MeterError;
use crate::models::DataSpec;

/// A bandwidth estimator and a transfer observer presented as one object
///
/// The meter holds collaborator handles, not the collaborators themselves.
/// Pass `&T` to tie the meter's lifetime to borrowed collaborators, or
/// `Arc<T>` to share them with other owners. The meter is `Send` and `Sync`
/// exactly when both handles are.
#[derive(Debug, Clone)]
pub struct DataMeter<E, O> {
    estimator: E,
    observer: O,
}

impl<E: BandwidthEstimator, O> DataMeter<E, O> {
    /// Binds an estimator and an observer
    pub fn new(estimator: E, observer: O) -> Self {
        debug!(
            "Data meter bound: estimator={}, observer={}",
            std::any::type_name::<E>(),
            std::any::type_name::<O>()
        );
        Self {
            estimator,
            observer,
        }
    }

    /// Binds collaborators that may be absent, failing before any meter exists
    pub fn try_from_parts(estimator: Option<E>, observer: Option<O>) -> Result<Self, MeterError> {
        let estimator = estimator.ok_or(MeterError::MissingEstimator)?;
        let observer = observer.ok_or(MeterError::MissingObserver)?;
        Ok(Self::new(estimator, observer))
    }
}

impl<E, O> DataMeter<E, O> {
    pub fn builder() -> DataMeterBuilder<E, O> {
        DataMeterBuilder::default()
    }

    /// The estimator capability on its own
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// The observer capability on its own
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_parts(self) -> (E, O) {
        (self.estimator, self.observer)
    }
}

impl<E: BandwidthEstimator, O> BandwidthEstimator for DataMeter<E, O> {
    fn bitrate_estimate(&self) -> i64 {
        self.estimator.bitrate_estimate()
    }
}

impl<S, E, O: TransferObserver<S>> TransferObserver<S> for DataMeter<E, O> {
    type Error = O::Error;

    fn on_transfer_start(&self, source: &S, spec: &DataSpec) -> Result<(), Self::Error> {
        self.observer.on_transfer_start(source, spec)
    }

    fn on_bytes_transferred(&self, source: &S, bytes: u64) -> Result<(), Self::Error> {
        self.observer.on_bytes_transferred(source, bytes)
    }

    fn on_transfer_end(&self, source: &S) -> Result<(), Self::Error> {
        self.observer.on_transfer_end(source)
    }
}

/// Collects collaborators one at a time for embedders that discover them separately
#[derive(Debug)]
pub struct DataMeterBuilder<E, O> {
    estimator: Option<E>,
    observer: Option<O>,
}

impl<E, O> Default for DataMeterBuilder<E, O> {
    fn default() -> Self {
        Self {
            estimator: None,
            observer: None,
        }
    }
}

impl<E, O> DataMeterBuilder<E, O> {
    pub fn estimator(mut self, estimator: E) -> Self {
        self.estimator = Some(estimator);
        self
    }

    pub fn observer(mut self, observer: O) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl<E: BandwidthEstimator, O> DataMeterBuilder<E, O> {
    /// Fails with [`MeterError::MissingEstimator`] or [`MeterError::MissingObserver`]
    /// when a collaborator was never supplied; the estimator is checked first.
    pub fn build(self) -> Result<DataMeter<E, O>, MeterError> {
        DataMeter::try_from_parts(self.estimator, self.observer)
    }
}
