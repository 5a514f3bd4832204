/// One-slot redraw request queue.
///
/// Every source of viewport change funnels through `request`; repeated
/// requests inside one frame coalesce into a single pending redraw, so the
/// frame driver never schedules more than one pass per refresh.
#[derive(Debug, Default)]
pub struct RedrawQueue {
    pending: bool,
}

impl RedrawQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.pending = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the pending request, if any. Returns whether one was pending.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
