//! # Ports Layer
//!
//! - **Outbound (Driven)**: clock used to timestamp receipts

pub mod outbound;
