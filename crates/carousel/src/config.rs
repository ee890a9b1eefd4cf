use foundation::time::Millis;
use serde::{Deserialize, Serialize};

use crate::breakpoints::Breakpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    /// Used when the track's computed gap cannot be parsed.
    pub gap_fallback_px: f64,
    /// Slack for sub-pixel rounding when deciding whether an edge is reached.
    pub edge_tolerance_px: f64,
    /// Quiet period before a burst of resizes triggers one layout pass.
    pub resize_debounce: Millis,
    /// Wait after a smooth paging scroll before re-reading the offset.
    pub settle_delay: Millis,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            gap_fallback_px: 20.0,
            edge_tolerance_px: 1.0,
            resize_debounce: Millis(60),
            settle_delay: Millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselConfig;
    use foundation::time::Millis;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: CarouselConfig =
            serde_json::from_str(r#"{ "resize_debounce": 120, "breakpoints": { "single_max_px": 480 } }"#)
                .unwrap();
        assert_eq!(cfg.resize_debounce, Millis(120));
        assert_eq!(cfg.breakpoints.single_max_px, 480.0);
        assert_eq!(cfg.breakpoints.double_max_px, 1024.0);
        assert_eq!(cfg.gap_fallback_px, 20.0);
        assert_eq!(cfg.edge_tolerance_px, 1.0);
    }
}
