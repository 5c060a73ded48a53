//! Registration policy configuration.

use serde::{Deserialize, Serialize};

/// Policy bounds applied when events are created.
///
/// The capacity invariant enforced by the reservation engine does not
/// depend on these specific bounds; they only constrain what the catalog
/// accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Smallest capacity an event may declare.
    #[serde(default = "default_min_capacity")]
    pub min_capacity: i32,
    /// Largest capacity an event may declare.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: i32,
}

impl RegistrationConfig {
    /// Whether the given capacity is within the configured bounds.
    pub fn allows_capacity(&self, capacity: i32) -> bool {
        capacity >= self.min_capacity && capacity <= self.max_capacity
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_capacity: default_min_capacity(),
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_min_capacity() -> i32 {
    1
}

fn default_max_capacity() -> i32 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let policy = RegistrationConfig::default();
        assert!(policy.allows_capacity(1));
        assert!(policy.allows_capacity(1000));
        assert!(!policy.allows_capacity(0));
        assert!(!policy.allows_capacity(-5));
        assert!(!policy.allows_capacity(1001));
    }

    #[test]
    fn custom_bounds() {
        let policy = RegistrationConfig {
            min_capacity: 10,
            max_capacity: 50,
        };
        assert!(!policy.allows_capacity(9));
        assert!(policy.allows_capacity(10));
        assert!(policy.allows_capacity(50));
        assert!(!policy.allows_capacity(51));
    }
}
