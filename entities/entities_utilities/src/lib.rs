//! Entities Layer: Utilities
//!
//! Provides utility types:
//! - Big number operations (arbitrary precision magnitudes)
//! - Radix digit decomposition and Horner recomposition

pub mod big;

pub use big::BigNumber;
