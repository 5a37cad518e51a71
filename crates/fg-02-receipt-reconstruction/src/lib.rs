//! # Receipt Reconstruction Subsystem (fg-02)
//!
//! Turns the raw status payload returned by an access node into a
//! [`TransactionReceipt`].
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`):
//!   - `status`: (status, result code) to outcome flags
//!   - `events`: fee, amount, sender and receiver from emitted events
//!   - `receipt`: the receipt type and its builder
//! - **Ports Layer** (`ports/`): `TimeSource` for the receipt timestamp
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fg_02_receipt_reconstruction::ReceiptBuilder;
//! use shared_types::NetworkConfig;
//!
//! let builder = ReceiptBuilder::new(NetworkConfig::testnet());
//! let receipt = builder.build(&tx_id, &payload);
//! ```

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::events::EventExtractor;
pub use domain::receipt::{ReceiptBuilder, TransactionReceipt};
pub use domain::status::{decode, decode_payload, OutcomeFlags, TransactionStatusCode};
pub use ports::outbound::{FixedTimeSource, SystemTimeSource, TimeSource};
