//! Kaipo Meter
//!
//! A data meter presents a bandwidth estimator and a transfer observer as one
//! value. Code that needs "something that reports bandwidth and hears about
//! transfers" can take a single [`meter::DataMeter`] instead of two separately
//! wired collaborators.

pub mod cli;
pub mod collaborators;
pub mod meter;
pub mod models;
pub mod settings;

pub use meter::{BandwidthEstimator, DataMeter, DataMeterBuilder, MeterError, TransferObserver};
