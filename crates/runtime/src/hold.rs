/// Reference count for a shared page-level state, such as the scroll lock
/// held by open overlays.
///
/// `acquire` and `release` report whether the call crossed the boundary
/// between free and held, which is when the caller touches the page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoldCount {
    holders: u32,
}

impl HoldCount {
    pub const fn new() -> Self {
        Self { holders: 0 }
    }

    pub fn is_held(&self) -> bool {
        self.holders > 0
    }

    /// Returns `true` when this is the first holder.
    pub fn acquire(&mut self) -> bool {
        self.holders = self.holders.saturating_add(1);
        self.holders == 1
    }

    /// Returns `true` when the last holder let go. Releasing a free count is
    /// a no-op.
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            tracing::trace!("release on a free hold count ignored");
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }
}
