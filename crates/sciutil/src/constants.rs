//! Numeric limits and tuning constants

// =============================================================================
// Fibonacci parameters
// =============================================================================

/// Largest index whose Fibonacci number fits in a `u128`
///
/// F(186) = 332,825,110,087,067,562,321,196,029,789,634,457,848 < 2^128 < F(187)
pub const MAX_FIBONACCI_INDEX: u64 = 186;

// =============================================================================
// Series evaluation parameters
// =============================================================================

/// Sample count from which modulus series are evaluated in parallel
#[cfg(not(test))]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Sample count from which modulus series are evaluated in parallel - reduced so unit tests hit the rayon path
#[cfg(test)]
pub const PARALLEL_THRESHOLD: usize = 64;

/// Interval (in samples) between progress callback invocations
pub const PROGRESS_INTERVAL: usize = 10_000;
