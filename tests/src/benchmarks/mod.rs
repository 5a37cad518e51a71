//! # Flow Gateway Benchmarks
//!
//! Criterion benchmark functions, grouped per subsystem and driven from
//! `benches/gateway_benchmarks.rs`.

pub mod fg_01_signing;
pub mod fg_02_receipts;
