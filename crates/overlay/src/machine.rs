use tracing::debug;

/// What an open overlay is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Media {
    /// `src` of the frame or image; empty while a preload is in flight.
    pub source: String,
    /// Frame title or image caption.
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(Media),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    /// A click whose target is the overlay container itself, not its content.
    Backdrop,
    Escape,
}

/// DOM mutation requested by a transition, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetSource(String),
    SetCaption(Option<String>),
    Reveal,
    LockScroll,
    FocusClose,
    ClearSource,
    Hide,
    UnlockScroll,
    RestoreFocus,
}

/// Rendered state of an overlay, derived from [`OverlayState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView<'a> {
    pub hidden: bool,
    pub source: &'a str,
    pub caption: Option<&'a str>,
    pub scroll_locked: bool,
}

/// Open/close state machine shared by every modal.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    name: &'static str,
    state: OverlayState,
}

impl Overlay {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: OverlayState::Closed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// Show `media`. Opening an already open overlay replaces what it shows.
    pub fn open(&mut self, media: Media) -> Vec<Effect> {
        let reopen = self.is_open();
        let mut effects = Vec::with_capacity(5);
        if reopen {
            effects.push(Effect::ClearSource);
        }
        effects.push(Effect::SetSource(media.source.clone()));
        effects.push(Effect::SetCaption(media.caption.clone()));
        if !reopen {
            effects.extend([Effect::Reveal, Effect::LockScroll]);
        }
        effects.push(Effect::FocusClose);
        debug!(overlay = self.name, reopen, "overlay opened");
        self.state = OverlayState::Open(media);
        effects
    }

    /// Replace the source of an open overlay. No-op when closed.
    pub fn swap_source(&mut self, source: String) -> Vec<Effect> {
        match &mut self.state {
            OverlayState::Open(media) => {
                media.source.clone_from(&source);
                vec![Effect::SetSource(source)]
            }
            OverlayState::Closed => Vec::new(),
        }
    }

    /// Close, clearing the source first so media stops loading or playing.
    pub fn close(&mut self, trigger: CloseTrigger) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        self.state = OverlayState::Closed;
        debug!(overlay = self.name, ?trigger, "overlay closed");
        vec![
            Effect::ClearSource,
            Effect::Hide,
            Effect::UnlockScroll,
            Effect::RestoreFocus,
        ]
    }

    /// Escape closes an open overlay.
    pub fn close_trigger_for_key(&self, key: &str) -> Option<CloseTrigger> {
        (self.is_open() && key == "Escape").then_some(CloseTrigger::Escape)
    }

    pub fn view(&self) -> OverlayView<'_> {
        match &self.state {
            OverlayState::Closed => OverlayView {
                hidden: true,
                source: "",
                caption: None,
                scroll_locked: false,
            },
            OverlayState::Open(media) => OverlayView {
                hidden: false,
                source: &media.source,
                caption: media.caption.as_deref(),
                scroll_locked: true,
            },
        }
    }
}
