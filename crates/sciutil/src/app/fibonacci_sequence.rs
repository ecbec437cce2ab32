//! Fibonacci sequence workflow
//!
//! Evaluates many indices against a single caller-owned memo so later
//! indices reuse the work of earlier ones.

use crate::domain::fibonacci::{FibonacciError, FibonacciMemo};

/// Options for sequence evaluation
#[derive(Clone)]
pub struct SequenceOptions<F = fn(usize, usize)> {
    /// Progress callback (current, total)
    pub on_progress: Option<F>,
}

impl Default for SequenceOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self { on_progress: None }
    }
}

impl<F> SequenceOptions<F> {
    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> SequenceOptions<G> {
        SequenceOptions {
            on_progress: Some(callback),
        }
    }
}

/// Calculate the Fibonacci number for each index, in order
///
/// All indices share `memo`. Evaluation stops at the first invalid index
/// and its error is returned; values computed before it stay memoized.
pub fn fibonacci_sequence<F>(
    memo: &mut FibonacciMemo,
    indices: &[i64],
    options: SequenceOptions<F>,
) -> Result<Vec<u128>, FibonacciError>
where
    F: FnMut(usize, usize),
{
    let SequenceOptions { mut on_progress } = options;
    let total = indices.len();
    let mut values = Vec::with_capacity(total);

    for (i, &n) in indices.iter().enumerate() {
        values.push(memo.fibonacci(n)?);

        if let Some(ref mut callback) = on_progress {
            callback(i + 1, total);
        }
    }

    Ok(values)
}

/// Calculate F(start) .. F(end - 1)
///
/// Returns an empty vector when `start >= end`. Indices are checked one at
/// a time, so an oversized `end` fails at the first index past
/// `MAX_FIBONACCI_INDEX` without allocating the whole range.
pub fn fibonacci_range(
    memo: &mut FibonacciMemo,
    start: i64,
    end: i64,
) -> Result<Vec<u128>, FibonacciError> {
    let mut values = Vec::new();
    for n in start..end {
        values.push(memo.fibonacci(n)?);
    }
    Ok(values)
}
