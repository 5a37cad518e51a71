//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: capabilities the transaction builder calls

pub mod inbound;
