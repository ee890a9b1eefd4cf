/// Next action for one thumbnail element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailStep {
    /// Probe this URL first; report back with [`ThumbnailChain::loaded`] or
    /// [`ThumbnailChain::failed`].
    Preload(String),
    /// Use this URL directly; nothing better is left to try.
    Apply(String),
}

/// Best-first fallback over thumbnail candidates for a single link.
///
/// Every candidate but the last is probed before use; the last one is applied
/// unconditionally.
#[derive(Debug, Clone)]
pub struct ThumbnailChain {
    candidates: Vec<String>,
    index: usize,
}

impl ThumbnailChain {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            index: 0,
        }
    }

    pub fn start(&self) -> Option<ThumbnailStep> {
        self.step()
    }

    /// The probed candidate loaded; this is the URL to apply.
    pub fn loaded(&self) -> Option<&str> {
        self.candidates.get(self.index).map(String::as_str)
    }

    /// The probed candidate failed; move to the next one.
    pub fn failed(&mut self) -> Option<ThumbnailStep> {
        if self.index < self.candidates.len() {
            self.index += 1;
        }
        self.step()
    }

    fn step(&self) -> Option<ThumbnailStep> {
        let url = self.candidates.get(self.index)?.clone();
        if self.index + 1 < self.candidates.len() {
            Some(ThumbnailStep::Preload(url))
        } else {
            Some(ThumbnailStep::Apply(url))
        }
    }
}

/// `background-image` value for a thumbnail URL.
pub fn background_image_css(url: &str) -> String {
    format!("url(\"{}\")", url.replace('"', "%22"))
}
