//! # Adapters
//!
//! - `memory`: in-process access node for tests and local runs

pub mod memory;

pub use memory::InMemoryAccessNode;
