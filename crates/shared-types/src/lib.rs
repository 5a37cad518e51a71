//! # Shared Types Crate
//!
//! Cross-subsystem types for Flow Gateway.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: account addresses, ledger events and status
//!   payloads are defined once here and reused by signing, receipt
//!   reconstruction and the gateway.
//! - **Explicit Configuration**: network settings are plain values passed to
//!   each constructor. There is no process-wide configuration state.

pub mod entities;
pub mod errors;
pub mod network;

pub use entities::*;
pub use errors::*;
pub use network::*;
