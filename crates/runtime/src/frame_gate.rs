/// Collapses repeated "run on next frame" requests into one callback.
///
/// `request` returns `true` only when no frame is queued yet, so the caller
/// arms at most one animation-frame callback; the callback calls `fire`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameGate {
    queued: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.queued, true)
    }

    pub fn is_queued(&self) -> bool {
        self.queued
    }

    pub fn fire(&mut self) {
        self.queued = false;
    }
}

#[cfg(test)]
mod tests {
    use super::FrameGate;

    #[test]
    fn coalesces_requests_until_fired() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.is_queued());
        gate.fire();
        assert!(!gate.is_queued());
        assert!(gate.request());
    }
}
