//! Benchmark support crate for spanmend.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for tree construction and the removal sweep.

pub mod error;
pub mod params;
pub mod source;
