//! # Flow Gateway Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── fg_01_signing.rs
//! │   └── fg_02_receipts.rs
//! │
//! └── integration/      # Cross-subsystem flows
//!     ├── lookup_flow.rs
//!     └── submission_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fg-tests
//!
//! # Benchmarks
//! cargo bench -p fg-tests
//! ```

pub mod benchmarks;
pub mod integration;
