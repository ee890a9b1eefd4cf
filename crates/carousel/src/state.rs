/// Scroll geometry sampled from the viewport and track elements.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScrollMetrics {
    /// `viewport.scrollLeft`
    pub scroll_left: f64,
    /// `track.scrollWidth`
    pub track_width: f64,
    /// `viewport.clientWidth`
    pub viewport_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll_left(&self) -> f64 {
        (self.track_width - self.viewport_width).max(0.0)
    }
}

/// Carousel state owned by one engine instance.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CarouselState {
    /// Paging unit; the viewport's client width after the last layout pass.
    pub page_width: f64,
    pub metrics: ScrollMetrics,
    pub arrows: ArrowState,
}

impl CarouselState {
    pub fn max_scroll_left(&self) -> f64 {
        self.metrics.max_scroll_left()
    }

    /// Zero-based page under the current offset.
    pub fn current_page(&self) -> usize {
        if self.page_width <= 0.0 {
            return 0;
        }
        (self.metrics.scroll_left / self.page_width).round().max(0.0) as usize
    }

    /// Number of distinct page positions reachable by paging.
    pub fn page_count(&self) -> usize {
        if self.page_width <= 0.0 {
            return 1;
        }
        (self.max_scroll_left() / self.page_width).ceil() as usize + 1
    }
}

/// Enabled state of the paging controls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArrowState {
    pub left_disabled: bool,
    pub right_disabled: bool,
}

impl Default for ArrowState {
    fn default() -> Self {
        Self {
            left_disabled: true,
            right_disabled: true,
        }
    }
}

impl ArrowState {
    pub fn from_metrics(metrics: &ScrollMetrics, tolerance: f64) -> Self {
        Self {
            left_disabled: metrics.scroll_left <= tolerance,
            right_disabled: metrics.scroll_left >= metrics.max_scroll_left() - tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrowState, CarouselState, ScrollMetrics};

    fn metrics(scroll_left: f64, track_width: f64, viewport_width: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            track_width,
            viewport_width,
        }
    }

    #[test]
    fn max_scroll_is_never_negative() {
        assert_eq!(metrics(0.0, 500.0, 900.0).max_scroll_left(), 0.0);
        assert_eq!(metrics(0.0, 2700.0, 900.0).max_scroll_left(), 1800.0);
    }

    #[test]
    fn arrows_follow_edges_with_tolerance() {
        let at_start = ArrowState::from_metrics(&metrics(0.6, 2700.0, 900.0), 1.0);
        assert!(at_start.left_disabled);
        assert!(!at_start.right_disabled);

        let middle = ArrowState::from_metrics(&metrics(900.0, 2700.0, 900.0), 1.0);
        assert!(!middle.left_disabled);
        assert!(!middle.right_disabled);

        let at_end = ArrowState::from_metrics(&metrics(1799.2, 2700.0, 900.0), 1.0);
        assert!(!at_end.left_disabled);
        assert!(at_end.right_disabled);
    }

    #[test]
    fn both_arrows_disabled_without_overflow() {
        let arrows = ArrowState::from_metrics(&metrics(0.0, 600.0, 900.0), 1.0);
        assert_eq!(arrows, ArrowState::default());
    }

    #[test]
    fn page_index_rounds_to_nearest() {
        let state = CarouselState {
            page_width: 900.0,
            metrics: metrics(1300.0, 2700.0, 900.0),
            ..CarouselState::default()
        };
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_count(), 3);
    }
}
