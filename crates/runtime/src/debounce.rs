use foundation::time::Millis;

/// Identifies one scheduled run of a debounced operation.
///
/// A token is only honoured while it is the most recent one handed out by its
/// [`Debouncer`]; scheduling again silently invalidates it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PendingToken(u64);

/// Coalesces bursts of triggers into a single run after a quiet period.
///
/// The debouncer owns no timer. Callers arm a platform timer with [`delay`]
/// for every token returned by [`schedule`] and call [`fire`] when it expires;
/// only the latest token wins.
///
/// [`delay`]: Debouncer::delay
/// [`schedule`]: Debouncer::schedule
/// [`fire`]: Debouncer::fire
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Millis,
    next: u64,
    pending: Option<PendingToken>,
}

impl Debouncer {
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            next: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Millis {
        self.delay
    }

    /// Supersede any pending run and hand out a fresh token.
    pub fn schedule(&mut self) -> PendingToken {
        let token = PendingToken(self.next);
        self.next = self.next.wrapping_add(1);
        if self.pending.replace(token).is_some() {
            tracing::trace!(token = token.0, "debounce superseded pending run");
        }
        token
    }

    /// Returns `true` if `token` is current, consuming it.
    pub fn fire(&mut self, token: PendingToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
