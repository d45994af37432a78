//! A render loop that re-arms itself after every pass and can be stopped
//! exactly once.

use log::{debug, trace};

/// Something that can be asked to run another frame soon.
pub trait RepaintScheduler {
    fn schedule_frame(&self);
}

impl RepaintScheduler for egui::Context {
    fn schedule_frame(&self) {
        self.request_repaint();
    }
}

/// Identifies one scheduled frame. A handle is consumed by the frame it
/// schedules, or invalidated by [`FrameLoop::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
    next_id: u64,
    cancelled: bool,
    frames_drawn: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the first frame. Does nothing once the loop has been cancelled
    /// or is already armed.
    pub fn start(&mut self, scheduler: &impl RepaintScheduler) {
        if self.cancelled || self.pending.is_some() {
            return;
        }
        debug!("frame loop started");
        self.arm(scheduler);
    }

    /// Runs one pass of `render` and schedules the next. `render` reports
    /// whether it drew anything. Returns false without rendering after the
    /// loop was cancelled.
    pub fn tick(
        &mut self,
        scheduler: &impl RepaintScheduler,
        render: impl FnOnce() -> bool,
    ) -> bool {
        if self.cancelled {
            trace!("frame skipped, loop cancelled");
            return false;
        }

        self.pending = None;
        if render() {
            self.frames_drawn += 1;
        }
        self.arm(scheduler);
        true
    }

    /// Invalidates the pending frame. Only the first call has any effect and
    /// returns the handle it invalidated.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        if self.cancelled {
            return None;
        }
        self.cancelled = true;
        let handle = self.pending.take();
        debug!(
            "frame loop cancelled after {} frames, pending {:?}",
            self.frames_drawn, handle
        );
        handle
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    fn arm(&mut self, scheduler: &impl RepaintScheduler) {
        self.next_id += 1;
        self.pending = Some(FrameHandle(self.next_id));
        scheduler.schedule_frame();
    }
}
