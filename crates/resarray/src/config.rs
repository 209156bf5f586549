//! Array configuration parameters.

/// How [`ResizableArray::remove`](crate::ResizableArray::remove) treats an
/// element that shifts into the slot it just vacated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemovePolicy {
    /// Re-test the current index after every deletion before advancing.
    ///
    /// Every element equal to the target is removed, including runs of
    /// adjacent duplicates.
    #[default]
    Rescan,
    /// Always advance the scan index after a deletion.
    ///
    /// The element shifted into the vacated slot is never examined, so in a
    /// run of adjacent matches every other one survives. Kept for callers
    /// that depend on the historical left-to-right single-pass behaviour.
    SkipShifted,
}

/// Configuration for a [`ResizableArray`](crate::ResizableArray).
///
/// Fixed at construction. The growth and shrink thresholds are not
/// configurable: capacity doubles when the array fills and halves when it
/// drops to a quarter full, never going below [`Self::INITIAL_CAPACITY`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Behaviour of `remove` when matches are adjacent.
    ///
    /// Default: [`RemovePolicy::Rescan`].
    pub remove_policy: RemovePolicy,
}

impl ArrayConfig {
    /// Capacity of a freshly constructed or cleared array.
    ///
    /// Also the floor: shrinking never goes below this.
    pub const INITIAL_CAPACITY: usize = 2;

    /// Default `remove` policy.
    pub const DEFAULT_REMOVE_POLICY: RemovePolicy = RemovePolicy::Rescan;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            remove_policy: Self::DEFAULT_REMOVE_POLICY,
        }
    }

    /// Return this config with the given `remove` policy.
    pub fn with_remove_policy(mut self, policy: RemovePolicy) -> Self {
        self.remove_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_rescans() {
        assert_eq!(ArrayConfig::default().remove_policy, RemovePolicy::Rescan);
        assert_eq!(ArrayConfig::new(), ArrayConfig::default());
    }

    #[test]
    fn initial_capacity_is_power_of_two() {
        assert!(ArrayConfig::INITIAL_CAPACITY.is_power_of_two());
        assert_eq!(ArrayConfig::INITIAL_CAPACITY, 2);
    }

    #[test]
    fn with_remove_policy_overrides() {
        let config = ArrayConfig::new().with_remove_policy(RemovePolicy::SkipShifted);
        assert_eq!(config.remove_policy, RemovePolicy::SkipShifted);
    }
}
