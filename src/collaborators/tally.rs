//! Bookkeeping observer
//!
//! Tracks which sources currently have a transfer open, how many bytes each
//! has moved, and a summary of every transfer that has ended. Notifications
//! that break the start/bytes/end sequence for a source are rejected with a
//! [`TallyError`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use log::trace;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::meter::TransferObserver;
use crate::models::DataSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TallyError {
    /// A second start arrived for a source whose transfer has not ended
    #[error("transfer from {source_id} is already active")]
    AlreadyActive { source_id: String },

    /// Bytes or an end arrived for a source with no open transfer
    #[error("no active transfer from {source_id}")]
    NotActive { source_id: String },
}

/// Record of a finished transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSummary<S> {
    pub source: S,
    pub uri: String,
    pub bytes: u64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl<S> TransferSummary<S> {
    pub fn elapsed_ms(&self) -> i64 {
        (self.ended_at - self.started_at).num_milliseconds()
    }
}

#[derive(Debug)]
struct ActiveTransfer {
    uri: String,
    bytes: u64,
    started_at: DateTime<Utc>,
}

#[derive(Debug)]
struct TallyState<S> {
    active: HashMap<S, ActiveTransfer>,
    completed: Vec<TransferSummary<S>>,
    total_bytes: u64,
}

#[derive(Debug)]
pub struct TransferTally<S> {
    state: Mutex<TallyState<S>>,
}

impl<S> Default for TransferTally<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TransferTally<S> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TallyState {
                active: HashMap::new(),
                completed: Vec::new(),
                total_bytes: 0,
            }),
        }
    }

    /// Bytes counted across every transfer, open or finished
    pub fn total_bytes(&self) -> u64 {
        self.state.lock().total_bytes
    }

    pub fn active_count(&self) -> usize {
        self.state.lock().active.len()
    }
}

impl<S: Clone> TransferTally<S> {
    pub fn completed(&self) -> Vec<TransferSummary<S>> {
        self.state.lock().completed.clone()
    }
}

impl<S: Eq + Hash> TransferTally<S> {
    /// Bytes moved so far by the open transfer from `source`
    pub fn bytes_in_flight(&self, source: &S) -> Option<u64> {
        self.state.lock().active.get(source).map(|t| t.bytes)
    }
}

impl<S: Eq + Hash + Clone + Debug> TransferObserver<S> for TransferTally<S> {
    type Error = TallyError;

    fn on_transfer_start(&self, source: &S, spec: &DataSpec) -> Result<(), TallyError> {
        let mut state = self.state.lock();
        if state.active.contains_key(source) {
            return Err(TallyError::AlreadyActive {
                source_id: format!("{source:?}"),
            });
        }
        state.active.insert(
            source.clone(),
            ActiveTransfer {
                uri: spec.uri.clone(),
                bytes: 0,
                started_at: Utc::now(),
            },
        );
        trace!("Tally opened transfer {:?} for {}", source, spec.uri);
        Ok(())
    }

    fn on_bytes_transferred(&self, source: &S, bytes: u64) -> Result<(), TallyError> {
        let mut state = self.state.lock();
        let transfer = state
            .active
            .get_mut(source)
            .ok_or_else(|| TallyError::NotActive {
                source_id: format!("{source:?}"),
            })?;
        transfer.bytes = transfer.bytes.saturating_add(bytes);
        state.total_bytes = state.total_bytes.saturating_add(bytes);
        Ok(())
    }

    fn on_transfer_end(&self, source: &S) -> Result<(), TallyError> {
        let mut state = self.state.lock();
        let (source, transfer) =
            state
                .active
                .remove_entry(source)
                .ok_or_else(|| TallyError::NotActive {
                    source_id: format!("{source:?}"),
                })?;
        trace!(
            "Tally closed transfer {:?} after {} bytes",
            source, transfer.bytes
        );
        state.completed.push(TransferSummary {
            source,
            uri: transfer.uri,
            bytes: transfer.bytes,
            started_at: transfer.started_at,
            ended_at: Utc::now(),
        });
        Ok(())
    }
}
