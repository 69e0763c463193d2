//! Ready-made collaborators for the data meter
//!
//! - `noop`: Estimator with no estimate and an observer that ignores everything
//! - `manual`: Estimator fed from outside
//! - `recorder`: Observer keeping an ordered event log
//! - `tally`: Observer doing per-source transfer bookkeeping
//! - `logging`: Observer decorator that logs notifications
//! - `formatting`: Human-readable bitrates and byte counts

pub mod formatting;
pub mod logging;
pub mod manual;
pub mod noop;
pub mod recorder;
pub mod tally;

pub use formatting::{format_bitrate, format_bytes};
pub use logging::LoggingObserver;
pub use manual::ManualEstimator;
pub use noop::{NoEstimate, NoObserver};
pub use recorder::TransferRecorder;
pub use tally::{TallyError, TransferSummary, TransferTally};
