//! sciutil - Young's modulus and memoized Fibonacci calculators
//!
//! This crate provides functionality to:
//! - Compute Young's modulus (stress / strain) for single samples and series
//! - Compute Fibonacci numbers with an explicit, caller-owned memo table

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::fibonacci_sequence::{SequenceOptions, fibonacci_range, fibonacci_sequence};
pub use app::modulus_series::{SeriesOptions, SeriesSummary, modulus_series, summarize};
pub use constants::*;
pub use domain::fibonacci::{FibonacciError, FibonacciMemo, fibonacci};
pub use domain::modulus::{ModulusError, StressStrainSample, youngs_modulus, youngs_modulus_ieee};
