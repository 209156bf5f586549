//! Cumulative reallocation counters.

/// Reallocation counters for a single array, accumulated over its lifetime.
///
/// Read through [`ResizableArray::metrics`](crate::ResizableArray::metrics).
/// Failed operations never change these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeMetrics {
    /// Number of reallocations that doubled the capacity.
    pub grows: u64,
    /// Number of reallocations that reduced the capacity.
    pub shrinks: u64,
    /// Total live elements moved into a new buffer across all reallocations.
    pub elements_moved: u64,
}

impl ResizeMetrics {
    /// Total number of reallocations in either direction.
    pub fn reallocations(&self) -> u64 {
        self.grows + self.shrinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ResizeMetrics::default();
        assert_eq!(m.grows, 0);
        assert_eq!(m.shrinks, 0);
        assert_eq!(m.elements_moved, 0);
        assert_eq!(m.reallocations(), 0);
    }

    #[test]
    fn reallocations_sums_both_directions() {
        let m = ResizeMetrics {
            grows: 3,
            shrinks: 2,
            elements_moved: 11,
        };
        assert_eq!(m.reallocations(), 5);
    }
}
