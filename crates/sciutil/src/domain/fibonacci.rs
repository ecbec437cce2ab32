//! Memoized Fibonacci calculation
//!
//! F(0) = 0, F(1) = 1, F(n) = F(n - 1) + F(n - 2).
//!
//! The doubly-recursive definition is evaluated against an explicit memo
//! table owned by the caller. Without the table the recursion is O(2^n);
//! with it every index is computed once, O(n) amortized across all calls
//! sharing the same `FibonacciMemo`.

use crate::constants::MAX_FIBONACCI_INDEX;
use thiserror::Error;

#[cfg(feature = "fx-memo")]
type MemoMap = rustc_hash::FxHashMap<u64, u128>;

#[cfg(not(feature = "fx-memo"))]
type MemoMap = std::collections::HashMap<u64, u128>;

/// Fibonacci calculation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FibonacciError {
    /// Index is negative
    #[error("Cannot calculate Fibonacci numbers for negative index {0}")]
    NegativeIndex(i64),
    /// Result does not fit in u128
    #[error("Fibonacci number at index {0} overflows u128 (max index {max})", max = MAX_FIBONACCI_INDEX)]
    Overflow(u64),
}

/// Validate a public index and convert it to the internal representation
fn check_index(n: i64) -> Result<u64, FibonacciError> {
    let n = u64::try_from(n).map_err(|_| FibonacciError::NegativeIndex(n))?;
    if n > MAX_FIBONACCI_INDEX {
        return Err(FibonacciError::Overflow(n));
    }
    Ok(n)
}

/// Caller-owned Fibonacci memo table
///
/// Maps previously computed indices to their values. Entries are never
/// evicted; the table lives exactly as long as its owner. Use `clear` to
/// drop it early.
#[derive(Clone, Debug, Default)]
pub struct FibonacciMemo {
    table: MemoMap,
}

impl FibonacciMemo {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty memo with room for `capacity` indices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: MemoMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Calculate the nth Fibonacci number
    ///
    /// Known indices are answered from the table without recomputation.
    /// Every index visited by the recursion is recorded.
    ///
    /// # Errors
    /// * `NegativeIndex` if `n < 0`
    /// * `Overflow` if `n > MAX_FIBONACCI_INDEX`
    pub fn fibonacci(&mut self, n: i64) -> Result<u128, FibonacciError> {
        let n = check_index(n)?;
        Ok(self.compute(n))
    }

    /// Recursive evaluation (n must already be validated)
    fn compute(&mut self, n: u64) -> u128 {
        if let Some(&value) = self.table.get(&n) {
            return value;
        }

        let value = match n {
            0 => 0,
            1 => 1,
            _ => self.compute(n - 1) + self.compute(n - 2),
        };

        self.table.insert(n, value);
        value
    }

    /// Look up a previously computed value
    pub fn get(&self, n: i64) -> Option<u128> {
        u64::try_from(n)
            .ok()
            .and_then(|n| self.table.get(&n).copied())
    }

    /// Check whether index `n` is already in the table
    pub fn contains(&self, n: i64) -> bool {
        self.get(n).is_some()
    }

    /// Number of memoized indices
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop all memoized entries
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

/// Calculate the nth Fibonacci number with a memo scoped to this call
///
/// Nothing is retained between calls. Use `FibonacciMemo` directly to share
/// results across calls.
pub fn fibonacci(n: i64) -> Result<u128, FibonacciError> {
    let n_checked = check_index(n)?;
    FibonacciMemo::with_capacity(n_checked as usize + 1).fibonacci(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Iterative reference implementation
    fn fibonacci_iterative(n: u64) -> u128 {
        let (mut a, mut b) = (0u128, 1u128);
        for _ in 0..n {
            // b runs one index ahead and may wrap on the final step
            (a, b) = (b, a.wrapping_add(b));
        }
        a
    }

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), Ok(0));
        assert_eq!(fibonacci(1), Ok(1));
    }

    #[test]
    fn test_fibonacci_known_values() {
        assert_eq!(fibonacci(2), Ok(1));
        assert_eq!(fibonacci(5), Ok(5));
        assert_eq!(fibonacci(10), Ok(55));
        assert_eq!(fibonacci(20), Ok(6765));
        assert_eq!(fibonacci(50), Ok(12_586_269_025));
        assert_eq!(fibonacci(93), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn test_fibonacci_negative_index() {
        assert_eq!(fibonacci(-1), Err(FibonacciError::NegativeIndex(-1)));
        assert_eq!(
            fibonacci(i64::MIN),
            Err(FibonacciError::NegativeIndex(i64::MIN))
        );
    }

    #[test]
    fn test_fibonacci_max_index() {
        assert_eq!(
            fibonacci(MAX_FIBONACCI_INDEX as i64),
            Ok(332_825_110_087_067_562_321_196_029_789_634_457_848)
        );
    }

    #[test]
    fn test_fibonacci_overflow() {
        let n = MAX_FIBONACCI_INDEX + 1;
        assert_eq!(fibonacci(n as i64), Err(FibonacciError::Overflow(n)));
        assert_eq!(
            fibonacci(i64::MAX),
            Err(FibonacciError::Overflow(i64::MAX as u64))
        );
    }

    #[test]
    fn test_fibonacci_matches_iterative() {
        let mut memo = FibonacciMemo::new();
        for n in 0..=MAX_FIBONACCI_INDEX {
            assert_eq!(
                memo.fibonacci(n as i64).unwrap(),
                fibonacci_iterative(n),
                "mismatch at index {}",
                n
            );
        }
    }

    #[test]
    fn test_memo_records_all_visited_indices() {
        let mut memo = FibonacciMemo::new();
        assert!(memo.is_empty());

        memo.fibonacci(10).unwrap();

        // 0..=10 are all visited by the recursion
        assert_eq!(memo.len(), 11);
        for n in 0..=10 {
            assert!(memo.contains(n), "index {} not memoized", n);
        }
        assert!(!memo.contains(11));
        assert_eq!(memo.get(7), Some(13));
    }

    #[test]
    fn test_memo_repeated_call_is_lookup() {
        let mut memo = FibonacciMemo::new();
        let first = memo.fibonacci(30).unwrap();
        let len = memo.len();

        let second = memo.fibonacci(30).unwrap();
        assert_eq!(first, second);
        assert_eq!(memo.len(), len);

        // Smaller index is answered from the table as well
        memo.fibonacci(12).unwrap();
        assert_eq!(memo.len(), len);
    }

    #[test]
    fn test_memo_error_leaves_table_untouched() {
        let mut memo = FibonacciMemo::new();
        memo.fibonacci(5).unwrap();

        assert!(memo.fibonacci(-3).is_err());
        assert!(memo.fibonacci(500).is_err());
        assert_eq!(memo.len(), 6);
    }

    #[test]
    fn test_memo_get_negative() {
        let mut memo = FibonacciMemo::new();
        memo.fibonacci(3).unwrap();
        assert_eq!(memo.get(-1), None);
        assert!(!memo.contains(-1));
    }

    #[test]
    fn test_memo_clear() {
        let mut memo = FibonacciMemo::with_capacity(16);
        memo.fibonacci(15).unwrap();
        assert!(!memo.is_empty());

        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.fibonacci(15), Ok(610));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FibonacciError::NegativeIndex(-4).to_string(),
            "Cannot calculate Fibonacci numbers for negative index -4"
        );
        assert_eq!(
            FibonacciError::Overflow(200).to_string(),
            "Fibonacci number at index 200 overflows u128 (max index 186)"
        );
    }
}
