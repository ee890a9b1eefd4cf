use crate::machine::{CloseTrigger, Effect, Media, Overlay};
use crate::youtube::{VideoConfig, VideoId};

/// Embedded-player modal.
#[derive(Debug, Clone)]
pub struct VideoModal {
    overlay: Overlay,
    config: VideoConfig,
}

impl VideoModal {
    pub fn new(config: VideoConfig) -> Self {
        Self {
            overlay: Overlay::new("video"),
            config,
        }
    }

    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Open the player for `id`; `title` comes from the trigger link.
    pub fn open(&mut self, id: &VideoId, title: Option<&str>) -> Vec<Effect> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.config.default_title.as_str())
            .to_owned();
        self.overlay.open(Media {
            source: self.config.embed_url(id),
            caption: Some(title),
        })
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> Vec<Effect> {
        self.overlay.close(trigger)
    }
}
