use serde::{Deserialize, Serialize};

/// Allows the source to serve the data gzip-compressed.
pub const FLAG_ALLOW_GZIP: u32 = 1;
/// Asks caching layers to skip the data when its length is not known up front.
pub const FLAG_DONT_CACHE_IF_LENGTH_UNKNOWN: u32 = 1 << 1;

/// Describes the region of a resource that a transfer reads
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataSpec {
    pub uri: String,
    /// Byte offset into the resource where the transfer begins
    pub position: u64,
    /// Number of bytes to read, `None` when the transfer runs to the end
    pub length: Option<u64>,
    /// Optional cache key overriding the uri
    pub key: Option<String>,
    pub flags: u32,
}

impl DataSpec {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            position: 0,
            length: None,
            key: None,
            flags: 0,
        }
    }

    pub fn with_range(mut self, position: u64, length: Option<u64>) -> Self {
        self.position = position;
        self.length = length;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_flag_set(&self, flag: u32) -> bool {
        self.flags & flag == flag
    }

    /// The key a cache would file this transfer under
    pub fn cache_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.uri)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferPhase {
    Start,
    Bytes,
    End,
}

/// A single transfer notification as delivered to an observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferEvent<S> {
    Start { source: S, spec: DataSpec },
    Bytes { source: S, bytes: u64 },
    End { source: S },
}

impl<S> TransferEvent<S> {
    pub fn source(&self) -> &S {
        match self {
            TransferEvent::Start { source, .. }
            | TransferEvent::Bytes { source, .. }
            | TransferEvent::End { source } => source,
        }
    }

    pub fn phase(&self) -> TransferPhase {
        match self {
            TransferEvent::Start { .. } => TransferPhase::Start,
            TransferEvent::Bytes { .. } => TransferPhase::Bytes,
            TransferEvent::End { .. } => TransferPhase::End,
        }
    }
}
