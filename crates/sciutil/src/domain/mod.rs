//! Domain layer - Pure computational logic
//!
//! This module contains pure functions without I/O or shared state.

pub mod fibonacci;
pub mod modulus;
