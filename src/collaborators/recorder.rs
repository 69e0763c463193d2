//! Observer that keeps an ordered log of every notification it receives

use std::convert::Infallible;

use parking_lot::Mutex;

use crate::meter::TransferObserver;
use crate::models::{DataSpec, TransferEvent};

#[derive(Debug)]
pub struct TransferRecorder<S> {
    events: Mutex<Vec<TransferEvent<S>>>,
}

impl<S> Default for TransferRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TransferRecorder<S> {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Takes the recorded events, leaving the recorder empty
    pub fn drain(&self) -> Vec<TransferEvent<S>> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl<S: Clone> TransferRecorder<S> {
    /// Snapshot of the events in arrival order
    pub fn events(&self) -> Vec<TransferEvent<S>> {
        self.events.lock().clone()
    }
}

impl<S: Clone> TransferObserver<S> for TransferRecorder<S> {
    type Error = Infallible;

    fn on_transfer_start(&self, source: &S, spec: &DataSpec) -> Result<(), Infallible> {
        self.events.lock().push(TransferEvent::Start {
            source: source.clone(),
            spec: spec.clone(),
        });
        Ok(())
    }

    fn on_bytes_transferred(&self, source: &S, bytes: u64) -> Result<(), Infallible> {
        self.events.lock().push(TransferEvent::Bytes {
            source: source.clone(),
            bytes,
        });
        Ok(())
    }

    fn on_transfer_end(&self, source: &S) -> Result<(), Infallible> {
        self.events.lock().push(TransferEvent::End {
            source: source.clone(),
        });
        Ok(())
    }
}
