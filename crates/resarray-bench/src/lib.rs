//! Workload builders shared by the resarray benchmarks.
//!
//! Each workload drives one access pattern over a [`ResizableArray<u64>`]
//! and returns a checksum so the optimiser cannot discard the work.

#![forbid(unsafe_code)]

use resarray::ResizableArray;

/// An array holding `0..n`, built by appending.
pub fn filled(n: u64) -> ResizableArray<u64> {
    let mut arr = ResizableArray::new();
    for i in 0..n {
        arr.push(i);
    }
    arr
}

/// Append `n` values, then pop them all. Exercises every growth and
/// shrink step between capacity 2 and the first power of two above `n`.
pub fn push_pop_cycle(n: u64) -> u64 {
    let mut arr = filled(n);
    let mut sum = 0;
    while let Ok(v) = arr.pop() {
        sum += v;
    }
    sum
}

/// Prepend `n` values. Each prepend shifts the whole array, so this is
/// quadratic in `n`.
pub fn prepend_all(n: u64) -> u64 {
    let mut arr = ResizableArray::new();
    for i in 0..n {
        arr.prepend(i);
    }
    arr.at(0).copied().unwrap_or(0)
}

/// Push and pop one value repeatedly with the array sitting exactly on
/// the growth threshold.
pub fn boundary_thrash(n: u64, rounds: u64) -> u64 {
    let mut arr = filled(n);
    let mut sum = 0;
    for i in 0..rounds {
        arr.push(i);
        sum += arr.pop().unwrap_or(0);
    }
    sum + arr.metrics().reallocations()
}

/// Delete from the front until empty.
pub fn drain_front(n: u64) -> u64 {
    let mut arr = filled(n);
    let mut sum = 0;
    while let Ok(v) = arr.delete(0) {
        sum += v;
    }
    sum
}

/// Remove every even value from an array of `0..n` where each value is
/// repeated `run` times in a row.
pub fn remove_runs(n: u64, run: usize) -> usize {
    let mut arr = ResizableArray::new();
    for i in 0..n {
        for _ in 0..run {
            arr.push(i);
        }
    }
    (0..n).step_by(2).map(|v| arr.remove(&v)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_cycle_sums_all_values() {
        assert_eq!(push_pop_cycle(100), 4950);
    }

    #[test]
    fn prepend_all_leaves_last_value_in_front() {
        assert_eq!(prepend_all(10), 9);
        assert_eq!(prepend_all(0), 0);
    }

    #[test]
    fn boundary_thrash_reallocates_only_once() {
        // 3 values in capacity 4: the first push grows to 8, and len 3 stays
        // above 8 / 4 after every pop.
        let arr_reallocs = {
            let mut arr = filled(3);
            let before = arr.metrics().reallocations();
            for i in 0..10 {
                arr.push(i);
                arr.pop().unwrap();
            }
            arr.metrics().reallocations() - before
        };
        assert_eq!(arr_reallocs, 1);
        assert_eq!(boundary_thrash(3, 10), 45 + 2);
    }

    #[test]
    fn drain_front_sums_all_values() {
        assert_eq!(drain_front(50), 1225);
    }

    #[test]
    fn remove_runs_counts_every_copy() {
        assert_eq!(remove_runs(10, 3), 15);
    }
}
