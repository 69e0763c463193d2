//! Data meter module
//!
//! Combines a bandwidth estimator and a transfer observer behind one value so
//! that code wanting both capabilities can be wired with a single collaborator.
//!
//! ## Module Organization
//!
//! - `capability`: The `BandwidthEstimator` and `TransferObserver` contracts
//! - `composite`: The `DataMeter` composite and its builder
//! - `errors`: Construction errors
//!
//! ## Usage
//!
//! ```rust
//! use kaipo_meter::collaborators::{ManualEstimator, TransferRecorder};
//! use kaipo_meter::meter::{BandwidthEstimator, DataMeter, TransferObserver};
//! use kaipo_meter::models::DataSpec;
//!
//! let estimator = ManualEstimator::new(500_000);
//! let recorder = TransferRecorder::<&str>::new();
//! let meter = DataMeter::new(&estimator, &recorder);
//!
//! assert_eq!(meter.bitrate_estimate(), 500_000);
//! meter.on_transfer_start(&"segment-1", &DataSpec::new("https://cdn.example/1.ts")).unwrap();
//! assert_eq!(recorder.len(), 1);
//! ```

pub mod capability;
pub mod composite;
pub mod errors;

pub use capability::{BandwidthEstimator, NO_ESTIMATE, TransferObserver};
pub use composite::{DataMeter, DataMeterBuilder};
pub use errors::MeterError;

#[cfg(test)]
pub mod tests;
