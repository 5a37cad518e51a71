//! # Integration Flows
//!
//! - `lookup_flow`: status payload to receipt through the gateway
//! - `submission_flow`: signer, access node and receipt together

mod lookup_flow;
mod submission_flow;
