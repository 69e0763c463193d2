pub mod transfer;

pub use transfer::{
    DataSpec, FLAG_ALLOW_GZIP, FLAG_DONT_CACHE_IF_LENGTH_UNKNOWN, TransferEvent, TransferPhase,
};
