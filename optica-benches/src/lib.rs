//! Benchmark support crate for optica.
//!
//! Provides seeded synthetic data sources and parameter types used by the
//! Criterion benchmarks for the full OPTICS run and the seed frontier.

pub mod error;
pub mod params;
pub mod source;
