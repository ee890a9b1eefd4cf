use serde::{Deserialize, Serialize};

/// How an image-gallery link behaves when activated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinkRole {
    /// Opens the lightbox with the link's full-resolution image.
    Lightbox,
    /// Plain navigation to a detail page in a new tab.
    ExternalDetail,
    /// Not ours; left untouched.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkClasses {
    /// Class marking external detail links.
    pub external: String,
    /// Attribute carrying the full-resolution image URL.
    pub image_attr: String,
}

impl Default for LinkClasses {
    fn default() -> Self {
        Self {
            external: "ext-link".to_owned(),
            image_attr: "data-image".to_owned(),
        }
    }
}

impl LinkClasses {
    /// Classify from the link's `class` attribute and its image attribute value.
    /// External detail links win over lightbox triggers.
    pub fn role(&self, class_attr: &str, image_src: Option<&str>) -> LinkRole {
        if class_attr.split_ascii_whitespace().any(|c| c == self.external) {
            LinkRole::ExternalDetail
        } else if image_src.is_some_and(|s| !s.trim().is_empty()) {
            LinkRole::Lightbox
        } else {
            LinkRole::Other
        }
    }
}

/// Attributes that make a link open in a new browsing context without an opener.
pub const NEW_TAB_ATTRS: [(&str, &str); 2] = [("target", "_blank"), ("rel", "noopener noreferrer")];
