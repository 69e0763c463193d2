//! Test module organization for the data meter
//!
//! Forwarding behaviour and construction are tested separately.

pub mod builder_tests;
