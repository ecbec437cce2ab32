//! Application layer - Use case implementations
//!
//! This module composes domain functions into batch workflows.

pub mod fibonacci_sequence;
pub mod modulus_series;
