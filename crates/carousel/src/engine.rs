use foundation::bounds::clamp;
use tracing::debug;

use crate::config::CarouselConfig;
use crate::layout::{LayoutPlan, resolve_gap};
use crate::state::{ArrowState, CarouselState, ScrollMetrics};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump without animation; used for layout corrections.
    Instant,
    Smooth,
}

/// Horizontal scroll the caller should apply to the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollCommand {
    pub left: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Layout, snapping and paging for a single carousel.
///
/// A layout pass is split in two because card widths applied to the DOM are
/// not measurable until the browser has reflowed:
///
/// 1. [`plan_layout`](Self::plan_layout) sizes the cards from the window width
///    and the viewport's current box;
/// 2. on the next animation frame, [`finish_layout`](Self::finish_layout)
///    takes the reflowed measurements, adopts the viewport width as the page
///    width and returns the instant scroll that snaps to the nearest page.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    config: CarouselConfig,
    state: CarouselState,
}

impl CarouselEngine {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            state: CarouselState::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn arrows(&self) -> ArrowState {
        self.state.arrows
    }

    /// Size cards for the current window. `gap` and `column_gap` are the
    /// track's computed style values.
    pub fn plan_layout(
        &self,
        window_width: f64,
        viewport_width: f64,
        gap: &str,
        column_gap: &str,
    ) -> LayoutPlan {
        let gap = resolve_gap(gap, column_gap, self.config.gap_fallback_px);
        LayoutPlan::new(&self.config.breakpoints, window_width, viewport_width, gap)
    }

    /// Adopt reflowed measurements and snap to the nearest page boundary.
    pub fn finish_layout(&mut self, metrics: ScrollMetrics) -> ScrollCommand {
        self.state.page_width = metrics.viewport_width.max(0.0);
        let target = self.snap_target(&metrics);
        self.state.metrics = ScrollMetrics {
            scroll_left: target,
            ..metrics
        };
        self.refresh_arrows();
        debug!(
            page_width = self.state.page_width,
            page = self.state.current_page(),
            pages = self.state.page_count(),
            from = metrics.scroll_left,
            to = target,
            "carousel layout snapped"
        );
        ScrollCommand {
            left: target,
            behavior: ScrollBehavior::Instant,
        }
    }

    /// Move one page in `direction` from the observed offset.
    pub fn page(&mut self, direction: Direction, metrics: ScrollMetrics) -> ScrollCommand {
        self.state.metrics = metrics;
        let step = if self.state.page_width > 0.0 {
            self.state.page_width
        } else {
            metrics.viewport_width
        };
        let max = metrics.max_scroll_left();
        let target = match direction {
            Direction::Previous => (metrics.scroll_left - step).max(0.0),
            Direction::Next => (metrics.scroll_left + step).min(max),
        };
        debug!(?direction, from = metrics.scroll_left, to = target, "carousel page");
        ScrollCommand {
            left: target,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Record a scroll observed from the platform and re-derive arrow state.
    pub fn sync_scroll(&mut self, metrics: ScrollMetrics) -> ArrowState {
        self.state.metrics = metrics;
        self.refresh_arrows()
    }

    fn snap_target(&self, metrics: &ScrollMetrics) -> f64 {
        let page = self.state.page_width;
        let snapped = if page > 0.0 {
            (metrics.scroll_left / page).round() * page
        } else {
            0.0
        };
        clamp(snapped, 0.0, metrics.max_scroll_left())
    }

    fn refresh_arrows(&mut self) -> ArrowState {
        self.state.arrows =
            ArrowState::from_metrics(&self.state.metrics, self.config.edge_tolerance_px);
        self.state.arrows
    }
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CarouselEngine, Direction, ScrollBehavior};
    use crate::state::{ArrowState, ScrollMetrics};
    use pretty_assertions::assert_eq;

    fn metrics(scroll_left: f64, track_width: f64, viewport_width: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            track_width,
            viewport_width,
        }
    }

    #[test]
    fn layout_snaps_to_nearest_page_instantly() {
        let mut engine = CarouselEngine::default();
        let cmd = engine.finish_layout(metrics(1320.0, 3600.0, 900.0));
        assert_eq!(cmd.left, 900.0);
        assert_eq!(cmd.behavior, ScrollBehavior::Instant);
        assert_eq!(engine.state().page_width, 900.0);
        assert_eq!(engine.state().metrics.scroll_left, 900.0);
    }

    #[test]
    fn snapped_offset_is_page_aligned_and_bounded() {
        let mut engine = CarouselEngine::default();
        for viewport in [320.0, 615.5, 900.0, 1180.0] {
            for pages in 1..6u32 {
                let track = viewport * f64::from(pages);
                let max = track - viewport;
                for step in 0..40u32 {
                    let scroll = max * f64::from(step) / 39.0;
                    engine.finish_layout(metrics(scroll, track, viewport));
                    let s = engine.state().metrics.scroll_left;
                    assert!(s >= 0.0 && s <= max, "{s} outside [0, {max}]");
                    let rem = s % viewport;
                    assert!(rem <= 1.0 || viewport - rem <= 1.0, "{s} not aligned to {viewport}");
                }
            }
        }
    }

    #[test]
    fn resize_resnaps_into_shrunken_range() {
        let mut engine = CarouselEngine::default();
        engine.finish_layout(metrics(2400.0, 3600.0, 1200.0));
        let cmd = engine.finish_layout(metrics(2400.0, 2400.0, 800.0));
        assert_eq!(cmd.left, 1600.0);
    }

    #[test]
    fn zero_page_width_snaps_to_start() {
        let mut engine = CarouselEngine::default();
        let cmd = engine.finish_layout(metrics(300.0, 0.0, 0.0));
        assert_eq!(cmd.left, 0.0);
    }

    #[test]
    fn right_clicks_stop_at_last_page() {
        let page = 900.0;
        for k in 0..5u32 {
            let track = page * f64::from(k + 1);
            for n in 0..8u32 {
                let mut engine = CarouselEngine::default();
                engine.finish_layout(metrics(0.0, track, page));
                let mut offset = 0.0;
                for _ in 0..n {
                    let cmd = engine.page(Direction::Next, metrics(offset, track, page));
                    assert_eq!(cmd.behavior, ScrollBehavior::Smooth);
                    offset = cmd.left;
                }
                assert_eq!(offset, f64::from(n.min(k)) * page, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn left_click_clamps_at_zero() {
        let mut engine = CarouselEngine::default();
        engine.finish_layout(metrics(0.0, 2700.0, 900.0));
        let cmd = engine.page(Direction::Previous, metrics(400.0, 2700.0, 900.0));
        assert_eq!(cmd.left, 0.0);
        let cmd = engine.page(Direction::Previous, metrics(1800.0, 2700.0, 900.0));
        assert_eq!(cmd.left, 900.0);
    }

    #[test]
    fn paging_before_first_layout_uses_viewport_width() {
        let mut engine = CarouselEngine::default();
        let cmd = engine.page(Direction::Next, metrics(0.0, 2700.0, 900.0));
        assert_eq!(cmd.left, 900.0);
    }

    #[test]
    fn manual_scroll_updates_arrows() {
        let mut engine = CarouselEngine::default();
        engine.finish_layout(metrics(0.0, 2700.0, 900.0));
        assert_eq!(
            engine.arrows(),
            ArrowState {
                left_disabled: true,
                right_disabled: false
            }
        );
        let arrows = engine.sync_scroll(metrics(1799.5, 2700.0, 900.0));
        assert_eq!(
            arrows,
            ArrowState {
                left_disabled: false,
                right_disabled: true
            }
        );
    }

    #[test]
    fn fewer_cards_than_view_disables_both_arrows() {
        let mut engine = CarouselEngine::default();
        engine.finish_layout(metrics(0.0, 560.0, 900.0));
        assert_eq!(engine.state().max_scroll_left(), 0.0);
        assert_eq!(engine.arrows(), ArrowState::default());
    }
}
