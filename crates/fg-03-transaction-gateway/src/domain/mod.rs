//! # Domain Layer
//!
//! Request and response shapes, script templates, fee schedule and amount
//! normalization. No I/O.

pub mod entities;
pub mod errors;
pub mod fees;
pub mod scripts;

pub use entities::*;
pub use errors::*;
pub use fees::*;
pub use scripts::*;
