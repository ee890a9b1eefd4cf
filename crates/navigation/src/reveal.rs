use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    /// `IntersectionObserver` root margin, CSS shorthand.
    pub root_margin: String,
    pub class_name: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.35,
            root_margin: "6% 0px".to_owned(),
            class_name: "in-view".to_owned(),
        }
    }
}

/// Sections that have been scrolled into view at least once, by index.
///
/// Revealing is one-way: nothing ever leaves the set.
#[derive(Debug, Default, Clone)]
pub struct RevealTracker {
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `section` is seen intersecting.
    pub fn observe(&mut self, section: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(section)
    }
}

#[cfg(test)]
mod tests {
    use super::RevealTracker;

    #[test]
    fn reveal_is_one_way_and_idempotent() {
        let mut t = RevealTracker::new();
        assert!(!t.observe(0, false));
        assert!(t.observe(0, true));
        assert!(!t.observe(0, true));
        assert!(!t.observe(0, false));
        assert!(t.observe(1, true));
    }
}
