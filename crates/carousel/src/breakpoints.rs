use serde::{Deserialize, Serialize};

/// Window-width thresholds (inclusive upper bounds, CSS px) for cards per view.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// At or below this width one card is shown.
    pub single_max_px: f64,
    /// At or below this width two cards are shown; above it, three.
    pub double_max_px: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_max_px: 640.0,
            double_max_px: 1024.0,
        }
    }
}

impl Breakpoints {
    pub fn cards_per_view(&self, window_width: f64) -> u32 {
        if window_width <= self.single_max_px {
            1
        } else if window_width <= self.double_max_px {
            2
        } else {
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Breakpoints;

    #[test]
    fn thresholds_are_inclusive() {
        let bp = Breakpoints::default();
        assert_eq!(bp.cards_per_view(320.0), 1);
        assert_eq!(bp.cards_per_view(640.0), 1);
        assert_eq!(bp.cards_per_view(640.5), 2);
        assert_eq!(bp.cards_per_view(1024.0), 2);
        assert_eq!(bp.cards_per_view(1025.0), 3);
        assert_eq!(bp.cards_per_view(2560.0), 3);
    }

    #[test]
    fn every_width_maps_to_its_band() {
        let bp = Breakpoints::default();
        for w in (0..3000).step_by(7) {
            let w = f64::from(w);
            let expected = if w <= 640.0 {
                1
            } else if w <= 1024.0 {
                2
            } else {
                3
            };
            assert_eq!(bp.cards_per_view(w), expected, "width {w}");
        }
    }
}
