use foundation::bounds::Rect;
use serde::{Deserialize, Serialize};

/// Fixed-header compensation for in-page links.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub header_px: f64,
    pub padding_px: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            header_px: 64.0,
            padding_px: 12.0,
        }
    }
}

impl AnchorConfig {
    pub fn offset(&self) -> f64 {
        self.header_px + self.padding_px
    }

    /// Scroll position inside the container that puts `target` just below the
    /// fixed header. Both rects are client rects; `scroll_top` is the
    /// container's current offset.
    pub fn scroll_top_for(&self, target: &Rect, container: &Rect, scroll_top: f64) -> f64 {
        (target.top_relative_to(container) + scroll_top - self.offset()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::AnchorConfig;
    use foundation::bounds::Rect;

    #[test]
    fn subtracts_header_and_padding() {
        let cfg = AnchorConfig::default();
        let container = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let target = Rect::new(0.0, 900.0, 1200.0, 800.0);
        assert_eq!(cfg.scroll_top_for(&target, &container, 800.0), 1624.0);
    }

    #[test]
    fn accounts_for_container_offset() {
        let cfg = AnchorConfig::default();
        let container = Rect::new(0.0, 64.0, 1200.0, 736.0);
        let target = Rect::new(0.0, 400.0, 1200.0, 736.0);
        assert_eq!(cfg.scroll_top_for(&target, &container, 0.0), 260.0);
    }

    #[test]
    fn never_scrolls_above_the_top() {
        let cfg = AnchorConfig::default();
        let container = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let target = Rect::new(0.0, 20.0, 1200.0, 800.0);
        assert_eq!(cfg.scroll_top_for(&target, &container, 0.0), 0.0);
    }
}
