use std::fmt::{Debug, Display};

use log::{debug, info, warn};

use crate::meter::TransferObserver;
use crate::models::DataSpec;

/// Logs every notification, then hands it to the wrapped observer
///
/// The inner observer's result is returned as is. Failures are additionally
/// reported at `warn` level.
#[derive(Debug, Clone)]
pub struct LoggingObserver<O> {
    inner: O,
}

impl<O> LoggingObserver<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

fn report<E: Display>(result: Result<(), E>, phase: &str) -> Result<(), E> {
    if let Err(e) = &result {
        warn!("Transfer observer rejected {phase} notification: {e}");
    }
    result
}

impl<S, O> TransferObserver<S> for LoggingObserver<O>
where
    S: Debug,
    O: TransferObserver<S>,
    O::Error: Display,
{
    type Error = O::Error;

    fn on_transfer_start(&self, source: &S, spec: &DataSpec) -> Result<(), Self::Error> {
        info!(
            "Transfer started: source={:?}, uri={}, position={}, length={:?}",
            source, spec.uri, spec.position, spec.length
        );
        report(self.inner.on_transfer_start(source, spec), "start")
    }

    fn on_bytes_transferred(&self, source: &S, bytes: u64) -> Result<(), Self::Error> {
        debug!("Transfer progress: source={:?}, bytes={}", source, bytes);
        report(self.inner.on_bytes_transferred(source, bytes), "bytes")
    }

    fn on_transfer_end(&self, source: &S) -> Result<(), Self::Error> {
        info!("Transfer ended: source={:?}", source);
        report(self.inner.on_transfer_end(source), "end")
    }
}
