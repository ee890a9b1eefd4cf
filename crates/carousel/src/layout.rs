use crate::breakpoints::Breakpoints;

/// Card sizing for one layout pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutPlan {
    pub cards_per_view: u32,
    pub viewport_width: f64,
    pub gap: f64,
    pub card_width: f64,
}

impl LayoutPlan {
    pub fn new(breakpoints: &Breakpoints, window_width: f64, viewport_width: f64, gap: f64) -> Self {
        let cards_per_view = breakpoints.cards_per_view(window_width);
        Self {
            cards_per_view,
            viewport_width,
            gap,
            card_width: card_width(viewport_width, gap, cards_per_view),
        }
    }

    /// Width taken by one full page of cards and the gaps between them.
    pub fn page_extent(&self) -> f64 {
        let pv = f64::from(self.cards_per_view);
        self.card_width * pv + self.gap * (pv - 1.0)
    }

    /// CSS value applied to every card.
    pub fn card_width_css(&self) -> String {
        format!("{}px", self.card_width)
    }
}

/// Width of each card so that `cards_per_view` cards plus gaps fill `viewport_width`.
pub fn card_width(viewport_width: f64, gap: f64, cards_per_view: u32) -> f64 {
    let pv = f64::from(cards_per_view.max(1));
    ((viewport_width - gap * (pv - 1.0)) / pv).max(0.0)
}

/// Resolve the track gap from its computed `gap` / `column-gap` values.
///
/// The first non-empty value is parsed; if it has no numeric prefix (e.g.
/// `normal`) the fallback is used.
pub fn resolve_gap(gap: &str, column_gap: &str, fallback: f64) -> f64 {
    let raw = [gap, column_gap]
        .into_iter()
        .map(str::trim)
        .find(|s| !s.is_empty());
    match raw.and_then(parse_css_number) {
        Some(g) if g.is_finite() && g >= 0.0 => g,
        _ => fallback,
    }
}

/// Leading-number parse with `parseFloat` semantics: `"20px 12px"` is `20`.
pub fn parse_css_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{LayoutPlan, card_width, parse_css_number, resolve_gap};
    use crate::breakpoints::Breakpoints;

    #[test]
    fn parses_leading_numbers() {
        assert_eq!(parse_css_number("20px"), Some(20.0));
        assert_eq!(parse_css_number(" 12.5px 8px"), Some(12.5));
        assert_eq!(parse_css_number(".5rem"), Some(0.5));
        assert_eq!(parse_css_number("1e1px"), Some(10.0));
        assert_eq!(parse_css_number("3.px"), Some(3.0));
        assert_eq!(parse_css_number("normal"), None);
        assert_eq!(parse_css_number("-"), None);
        assert_eq!(parse_css_number(""), None);
    }

    #[test]
    fn gap_prefers_gap_then_column_gap_then_fallback() {
        assert_eq!(resolve_gap("24px", "8px", 20.0), 24.0);
        assert_eq!(resolve_gap("", "8px", 20.0), 8.0);
        assert_eq!(resolve_gap("", "", 20.0), 20.0);
        assert_eq!(resolve_gap("normal", "8px", 20.0), 20.0);
        assert_eq!(resolve_gap("-4px", "", 20.0), 20.0);
    }

    #[test]
    fn cards_and_gaps_fill_the_viewport() {
        let bp = Breakpoints::default();
        for (window, viewport, gap) in [
            (375.0, 343.0, 20.0),
            (800.0, 760.0, 16.0),
            (1024.0, 980.0, 20.0),
            (1440.0, 1180.0, 24.0),
            (1920.0, 1333.0, 13.5),
        ] {
            let plan = LayoutPlan::new(&bp, window, viewport, gap);
            assert!(
                (plan.page_extent() - viewport).abs() < 1e-6,
                "{window}/{viewport}/{gap}: {}",
                plan.page_extent()
            );
        }
    }

    #[test]
    fn card_width_never_negative() {
        assert_eq!(card_width(30.0, 20.0, 3), 0.0);
        assert_eq!(card_width(300.0, 20.0, 0), 300.0);
    }

    #[test]
    fn css_value_carries_unit() {
        let plan = LayoutPlan::new(&Breakpoints::default(), 1200.0, 1000.0, 20.0);
        assert_eq!(plan.cards_per_view, 3);
        assert_eq!(plan.card_width_css(), "320px");
    }
}
