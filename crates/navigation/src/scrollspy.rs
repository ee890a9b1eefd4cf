use foundation::ids::SectionId;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollspyConfig {
    /// Visible fraction a section needs before it becomes active.
    pub threshold: f64,
    pub class_name: String,
}

impl Default for ScrollspyConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            class_name: "active".to_owned(),
        }
    }
}

/// Observers report ratios at threshold crossings with float noise.
const RATIO_EPSILON: f64 = 1e-3;

/// A change of active section, to be mirrored into nav links and the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpyChange {
    pub active: SectionId,
    /// Passed to `history.replaceState`; never pushed.
    pub fragment: String,
}

/// Tracks which top-level section is in view.
#[derive(Debug, Clone)]
pub struct Scrollspy {
    threshold: f64,
    sections: Vec<SectionId>,
    active: Option<SectionId>,
}

impl Scrollspy {
    pub fn new(config: &ScrollspyConfig, sections: Vec<SectionId>) -> Self {
        Self {
            threshold: config.threshold,
            sections,
            active: None,
        }
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Whether a nav link `href` should carry the active class.
    pub fn is_active_href(&self, href: &str) -> bool {
        SectionId::from_fragment(href).is_some_and(|id| self.is_active(&id))
    }

    /// Feed one intersection entry. Returns a change only when the active
    /// section actually moves.
    pub fn observe(&mut self, id: &SectionId, ratio: f64, is_intersecting: bool) -> Option<SpyChange> {
        if !is_intersecting || ratio + RATIO_EPSILON < self.threshold {
            return None;
        }
        if !self.sections.contains(id) || self.is_active(id) {
            return None;
        }
        debug!(section = %id, ratio, "scrollspy active section changed");
        self.active = Some(id.clone());
        Some(SpyChange {
            active: id.clone(),
            fragment: id.fragment(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Scrollspy, ScrollspyConfig};
    use foundation::ids::SectionId;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> SectionId {
        SectionId::new(s).unwrap()
    }

    fn spy() -> Scrollspy {
        Scrollspy::new(
            &ScrollspyConfig::default(),
            vec![id("home"), id("projects"), id("contact")],
        )
    }

    #[test]
    fn activates_section_past_threshold() {
        let mut s = spy();
        assert_eq!(s.observe(&id("projects"), 0.3, true), None);
        let change = s.observe(&id("projects"), 0.6, true).unwrap();
        assert_eq!(change.fragment, "#projects");
        assert!(s.is_active_href("#projects"));
        assert!(!s.is_active_href("#home"));
    }

    #[test]
    fn active_link_is_exclusive() {
        let mut s = spy();
        s.observe(&id("home"), 1.0, true);
        s.observe(&id("contact"), 0.75, true);
        assert!(s.is_active(&id("contact")));
        assert!(!s.is_active(&id("home")));
    }

    #[test]
    fn repeated_entries_do_not_rewrite_the_url() {
        let mut s = spy();
        assert!(s.observe(&id("home"), 0.9, true).is_some());
        assert!(s.observe(&id("home"), 1.0, true).is_none());
    }

    #[test]
    fn leaving_and_unknown_sections_are_ignored() {
        let mut s = spy();
        assert_eq!(s.observe(&id("home"), 0.9, false), None);
        assert_eq!(s.observe(&id("footer"), 1.0, true), None);
        assert!(!s.is_active(&id("home")));
        assert!(!s.is_active(&id("footer")));
    }
}
