use tracing::debug;

use crate::machine::{CloseTrigger, Effect, Media, Overlay};

/// Full-resolution image load the DOM layer should start for an opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadRequest {
    pub generation: u64,
    pub source: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PreloadOutcome {
    Loaded,
    Failed,
}

/// Image viewer modal.
///
/// Opening reveals the modal immediately with an empty image and asks for a
/// preload; the image is swapped in only when that preload reports back, so the
/// viewer never shows a partially decoded frame. Preloads belonging to an
/// earlier opening are ignored.
#[derive(Debug, Clone)]
pub struct ImageLightbox {
    overlay: Overlay,
    generation: u64,
    pending: Option<PreloadRequest>,
    zoomed: bool,
}

impl Default for ImageLightbox {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLightbox {
    pub fn new() -> Self {
        Self {
            overlay: Overlay::new("image"),
            generation: 0,
            pending: None,
            zoomed: false,
        }
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn open(&mut self, source: &str, caption: Option<&str>) -> (Vec<Effect>, PreloadRequest) {
        self.generation = self.generation.wrapping_add(1);
        self.zoomed = false;
        let request = PreloadRequest {
            generation: self.generation,
            source: source.to_owned(),
        };
        self.pending = Some(request.clone());
        let caption = caption
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
        let effects = self.overlay.open(Media {
            source: String::new(),
            caption,
        });
        (effects, request)
    }

    /// Swap the preloaded image in. A failed load still swaps so the browser
    /// shows its broken-image state and the `alt` text.
    pub fn preload_finished(&mut self, generation: u64, outcome: PreloadOutcome) -> Vec<Effect> {
        let Some(request) = self.pending.take_if(|p| p.generation == generation) else {
            debug!(generation, "stale lightbox preload dropped");
            return Vec::new();
        };
        if outcome == PreloadOutcome::Failed {
            debug!(source = %request.source, "lightbox image failed to preload");
        }
        self.overlay.swap_source(request.source)
    }

    /// Flip the zoomed state of a displayed image. Returns the new state, or
    /// `None` when there is no image to zoom.
    pub fn toggle_zoom(&mut self) -> Option<bool> {
        if self.overlay.view().source.is_empty() {
            return None;
        }
        self.zoomed = !self.zoomed;
        Some(self.zoomed)
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> Vec<Effect> {
        self.pending = None;
        self.zoomed = false;
        self.overlay.close(trigger)
    }
}
