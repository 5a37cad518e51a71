//! # Transaction Signing Subsystem (fg-01)
//!
//! Produces account authorizations for transactions submitted to a Flow
//! access node.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): key decoding, hashing, signing, encoding
//! - **Ports Layer** (`ports/`): `AuthorizationFunction` and `SigningFunction`
//! - **Service Layer** (`service.rs`): `TransactionSigner`, one per account key
//!
//! ## Signature Format
//!
//! SHA-256 over the decoded message, ECDSA on secp256k1 with RFC 6979
//! nonces, encoded as 128 hex characters `r || s`.
//!
//! ## Security Notes
//!
//! - Private keys are held in an `Arc<SigningKey>` that is zeroized on drop
//! - Decoded key bytes are wiped immediately after parsing
//! - Keys are never logged; `Debug` output is redacted

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::ecdsa::{encode_signature, hash_message, SIGNATURE_HEX_LENGTH};
pub use domain::entities::{
    AccountRole, AuthorizedAccount, BaseAccount, CompositeSignature, Signable,
};
pub use domain::errors::SigningError;
pub use ports::inbound::{AuthorizationFunction, SigningFunction};
pub use service::{create_signer, TransactionSigner};
