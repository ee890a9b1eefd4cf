use crate::engine::Direction;

/// What currently holds keyboard focus, as far as shortcuts care.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FocusKind {
    TextInput,
    TextArea,
    ContentEditable,
    Other,
}

impl FocusKind {
    /// Classify from an element's tag name and `isContentEditable`.
    pub fn from_element(tag_name: &str, content_editable: bool) -> Self {
        if tag_name.eq_ignore_ascii_case("input") {
            FocusKind::TextInput
        } else if tag_name.eq_ignore_ascii_case("textarea") {
            FocusKind::TextArea
        } else if content_editable {
            FocusKind::ContentEditable
        } else {
            FocusKind::Other
        }
    }

    pub fn edits_text(self) -> bool {
        !matches!(self, FocusKind::Other)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyPress<'a> {
    /// `KeyboardEvent.key`
    pub key: &'a str,
    pub focus: FocusKind,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    /// A modal is covering the page.
    pub overlay_open: bool,
}

/// Map a global key press to a paging direction.
pub fn paging_shortcut(press: &KeyPress<'_>) -> Option<Direction> {
    if press.overlay_open || press.focus.edits_text() || press.alt || press.ctrl || press.meta {
        return None;
    }
    match press.key {
        "ArrowLeft" => Some(Direction::Previous),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusKind, KeyPress, paging_shortcut};
    use crate::engine::Direction;

    fn press(key: &str, focus: FocusKind) -> KeyPress<'_> {
        KeyPress {
            key,
            focus,
            alt: false,
            ctrl: false,
            meta: false,
            overlay_open: false,
        }
    }

    #[test]
    fn arrows_page_outside_text_fields() {
        assert_eq!(
            paging_shortcut(&press("ArrowLeft", FocusKind::Other)),
            Some(Direction::Previous)
        );
        assert_eq!(
            paging_shortcut(&press("ArrowRight", FocusKind::Other)),
            Some(Direction::Next)
        );
        assert_eq!(paging_shortcut(&press("ArrowUp", FocusKind::Other)), None);
    }

    #[test]
    fn text_editing_keeps_arrow_keys() {
        for focus in [
            FocusKind::TextInput,
            FocusKind::TextArea,
            FocusKind::ContentEditable,
        ] {
            assert_eq!(paging_shortcut(&press("ArrowRight", focus)), None);
        }
    }

    #[test]
    fn modified_arrows_are_left_to_the_browser() {
        let mut p = press("ArrowLeft", FocusKind::Other);
        p.alt = true;
        assert_eq!(paging_shortcut(&p), None);
    }

    #[test]
    fn open_overlay_keeps_carousel_still() {
        let mut p = press("ArrowRight", FocusKind::Other);
        p.overlay_open = true;
        assert_eq!(paging_shortcut(&p), None);
    }

    #[test]
    fn classifies_focus_by_tag() {
        assert_eq!(FocusKind::from_element("INPUT", false), FocusKind::TextInput);
        assert_eq!(FocusKind::from_element("TEXTAREA", false), FocusKind::TextArea);
        assert_eq!(FocusKind::from_element("DIV", true), FocusKind::ContentEditable);
        assert_eq!(FocusKind::from_element("BUTTON", false), FocusKind::Other);
    }
}
