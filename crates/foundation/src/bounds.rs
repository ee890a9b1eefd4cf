/// Client-space rectangle in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// Offset of `self` from `origin`, measured top edge to top edge.
    pub fn top_relative_to(&self, origin: &Rect) -> f64 {
        self.top - origin.top
    }
}

/// Clamp `v` into `[lo, hi]`. When `hi < lo` the lower bound wins.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::{Rect, clamp};

    #[test]
    fn relative_top_is_signed() {
        let root = Rect::new(0.0, 64.0, 800.0, 600.0);
        let above = Rect::new(0.0, -200.0, 800.0, 400.0);
        assert_eq!(above.top_relative_to(&root), -264.0);
    }

    #[test]
    fn clamp_prefers_lower_bound_on_empty_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(3.0, 0.0, -4.0), 0.0);
    }
}
