use carousel::CarouselConfig;
use navigation::{AnchorConfig, RevealConfig, ScrollspyConfig};
use overlay::{LinkClasses, VideoConfig};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

/// Element ids (`*_id`) and selectors the page markup provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markup {
    pub scroll_root_id: String,
    pub anchor_links: String,
    pub reveal_sections: String,
    pub spy_sections: String,
    pub nav_links: String,
    pub carousel_viewport_id: String,
    pub carousel_track_id: String,
    pub carousel_cards: String,
    pub arrow_left: String,
    pub arrow_right: String,
    pub orientation_query: String,
    pub video_triggers: String,
    pub video_source_attr: String,
    pub video_modal_id: String,
    pub video_frame_id: String,
    pub video_close: String,
    pub image_triggers: String,
    pub image_caption_attr: String,
    pub image_modal_id: String,
    pub image_view_id: String,
    pub image_caption_id: String,
    pub image_close: String,
    pub zoom_class: String,
    pub decorative_video: String,
    pub year_id: String,
}

impl Default for Markup {
    fn default() -> Self {
        let s = str::to_owned;
        Self {
            scroll_root_id: s("main"),
            anchor_links: s("a[href^=\"#\"]"),
            reveal_sections: s(".section.snap"),
            spy_sections: s("#main > section[id]"),
            nav_links: s(".nav a[href^=\"#\"]"),
            carousel_viewport_id: s("projectsViewport"),
            carousel_track_id: s("projectTrack"),
            carousel_cards: s(".card"),
            arrow_left: s(".arrow.left"),
            arrow_right: s(".arrow.right"),
            orientation_query: s("(orientation: portrait)"),
            video_triggers: s(".card .thumb[data-youtube]"),
            video_source_attr: s("data-youtube"),
            video_modal_id: s("ytModal"),
            video_frame_id: s("ytFrame"),
            video_close: s(".yt-close"),
            image_triggers: s("a[data-image], a.ext-link"),
            image_caption_attr: s("data-title"),
            image_modal_id: s("imgModal"),
            image_view_id: s("imgModalImg"),
            image_caption_id: s("imgModalCaption"),
            image_close: s(".img-close"),
            zoom_class: s("zoomed"),
            decorative_video: s("video[data-decorative]"),
            year_id: s("year"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `EnvFilter` directive for console logging.
    pub log_level: String,
    pub markup: Markup,
    pub carousel: CarouselConfig,
    pub anchor: AnchorConfig,
    pub reveal: RevealConfig,
    pub scrollspy: ScrollspyConfig,
    pub video: VideoConfig,
    pub links: LinkClasses,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            markup: Markup::default(),
            carousel: CarouselConfig::default(),
            anchor: AnchorConfig::default(),
            reveal: RevealConfig::default(),
            scrollspy: ScrollspyConfig::default(),
            video: VideoConfig::default(),
            links: LinkClasses::default(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides; missing keys keep their defaults. Blank input is the default config.
    pub fn from_json(json: &str) -> Result<Self, WebError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read the embedded config script, if the page has one.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, WebError> {
        match document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SiteConfig;
    use crate::error::WebError;
    use foundation::time::Millis;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_config_is_default() {
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn nested_overrides_merge_with_defaults() {
        let cfg = SiteConfig::from_json(
            r##"{
                "log_level": "debug",
                "markup": { "scroll_root_id": "page" },
                "carousel": { "resize_debounce": 100 },
                "anchor": { "header_px": 80 }
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.markup.scroll_root_id, "page");
        assert_eq!(cfg.markup.carousel_track_id, "projectTrack");
        assert_eq!(cfg.carousel.resize_debounce, Millis(100));
        assert_eq!(cfg.carousel.settle_delay, Millis(10));
        assert_eq!(cfg.anchor.offset(), 92.0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            SiteConfig::from_json("{ nope"),
            Err(WebError::Config(_))
        ));
    }
}
