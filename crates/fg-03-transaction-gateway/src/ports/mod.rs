//! # Ports Layer
//!
//! - **Inbound (Driving)**: `TransactionGatewayApi`
//! - **Outbound (Driven)**: `AccessNodeGateway`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
