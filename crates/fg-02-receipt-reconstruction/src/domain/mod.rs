//! # Domain Layer
//!
//! Pure decoding and extraction over status payloads. No I/O.

pub mod events;
pub mod receipt;
pub mod status;
